//! Asset catalog `.imageset` packaging.
//!
//! Each sprite becomes `<name>.imageset/` holding one PNG per density and a
//! `Contents.json` manifest:
//!
//! ```text
//! heart_full.imageset/
//!   heart_full@2x.png
//!   heart_full@3x.png
//!   Contents.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::error::{DitchError, Result};
use crate::render::{derive_variant, write_png};

/// Manifest file name inside every imageset.
pub const CONTENTS_FILENAME: &str = "Contents.json";

/// Display density of an exported file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Density {
    X2,
    X3,
}

impl Density {
    /// Densities in manifest order.
    pub const ALL: [Density; 2] = [Density::X2, Density::X3];

    /// Scale tag used in file names and the manifest.
    pub fn tag(self) -> &'static str {
        match self {
            Density::X2 => "2x",
            Density::X3 => "3x",
        }
    }

    /// Size relative to the @3x base as `(num, den)`.
    pub fn ratio(self) -> (u32, u32) {
        match self {
            Density::X2 => (2, 3),
            Density::X3 => (1, 1),
        }
    }

    pub fn filename(self, name: &str) -> String {
        format!("{name}@{}.png", self.tag())
    }
}

/// `Contents.json` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contents {
    pub images: Vec<ImageEntry>,
    pub info: Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub filename: String,
    pub idiom: String,
    pub scale: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    pub author: String,
    pub version: u32,
}

impl Contents {
    /// Manifest listing every density of `name`.
    pub fn for_sprite(name: &str) -> Self {
        Self {
            images: Density::ALL
                .iter()
                .map(|d| ImageEntry {
                    filename: d.filename(name),
                    idiom: "universal".to_string(),
                    scale: d.tag().to_string(),
                })
                .collect(),
            info: Info {
                author: "xcode".to_string(),
                version: 1,
            },
        }
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| DitchError::Config {
            message: format!("Failed to serialize {}: {}", CONTENTS_FILENAME, e),
            help: None,
        })
    }
}

/// A packaged sprite on disk.
#[derive(Debug, Clone)]
pub struct Imageset {
    pub dir: PathBuf,
    pub files: Vec<PathBuf>,
}

impl Imageset {
    /// Directory for `name` under `out_dir`.
    pub fn dir_for(out_dir: &Path, name: &str) -> PathBuf {
        out_dir.join(format!("{name}.imageset"))
    }

    /// Replace `<name>.imageset` with the @3x base, a derived @2x and the
    /// manifest. Any previous contents are removed first.
    pub fn write(out_dir: &Path, name: &str, base: &RgbaImage) -> Result<Self> {
        let dir = Self::dir_for(out_dir, name);
        if dir.exists() {
            fs::remove_dir_all(&dir).map_err(|e| DitchError::Io {
                path: dir.clone(),
                message: format!("Failed to remove old imageset: {}", e),
            })?;
        }
        fs::create_dir_all(&dir).map_err(|e| DitchError::Io {
            path: dir.clone(),
            message: format!("Failed to create directory: {}", e),
        })?;

        let mut files = Vec::with_capacity(Density::ALL.len() + 1);
        for density in Density::ALL {
            let path = dir.join(density.filename(name));
            match density.ratio() {
                (1, 1) => write_png(base, &path)?,
                (num, den) => write_png(&derive_variant(base, num, den), &path)?,
            }
            files.push(path);
        }

        let contents_path = dir.join(CONTENTS_FILENAME);
        let json = Contents::for_sprite(name).to_json()?;
        fs::write(&contents_path, json).map_err(|e| DitchError::Io {
            path: contents_path.clone(),
            message: format!("Failed to write manifest: {}", e),
        })?;
        files.push(contents_path);

        Ok(Self { dir, files })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{render_sprite, SUPERSAMPLE};
    use crate::sprites::Catalog;
    use image::Rgba;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_contents_json_layout() {
        let json = Contents::for_sprite("heart_full").to_json().unwrap();
        insta::assert_snapshot!(json, @r###"
        {
          "images": [
            {
              "filename": "heart_full@2x.png",
              "idiom": "universal",
              "scale": "2x"
            },
            {
              "filename": "heart_full@3x.png",
              "idiom": "universal",
              "scale": "3x"
            }
          ],
          "info": {
            "author": "xcode",
            "version": 1
          }
        }
        "###);
    }

    #[test]
    fn test_write_heart_imageset() {
        let temp = TempDir::new().unwrap();
        let heart = Catalog::standard().get("heart_full").cloned().unwrap();
        let base = render_sprite(&heart, SUPERSAMPLE).unwrap();

        let set = Imageset::write(temp.path(), "heart_full", &base).unwrap();
        assert_eq!(set.dir, temp.path().join("heart_full.imageset"));
        assert_eq!(set.files.len(), 3);

        let x3 = image::open(set.dir.join("heart_full@3x.png")).unwrap().to_rgba8();
        let x2 = image::open(set.dir.join("heart_full@2x.png")).unwrap().to_rgba8();
        assert_eq!(x3.dimensions(), (84, 78));
        assert_eq!(x2.dimensions(), (56, 52));
        assert_eq!(x3.as_raw(), base.as_raw());
        assert_eq!(x2.as_raw(), derive_variant(&base, 2, 3).as_raw());

        let text = fs::read_to_string(set.dir.join(CONTENTS_FILENAME)).unwrap();
        let contents: Contents = serde_json::from_str(&text).unwrap();
        assert_eq!(contents, Contents::for_sprite("heart_full"));
        let scales: Vec<_> = contents.images.iter().map(|i| i.scale.as_str()).collect();
        assert_eq!(scales, vec!["2x", "3x"]);
    }

    #[test]
    fn test_rewrite_replaces_previous_output() {
        let temp = TempDir::new().unwrap();
        let base = RgbaImage::from_pixel(12, 12, Rgba([255, 255, 255, 255]));
        let set = Imageset::write(temp.path(), "particle_dust", &base).unwrap();
        fs::write(set.dir.join("stale.png"), b"old").unwrap();

        let set = Imageset::write(temp.path(), "particle_dust", &base).unwrap();

        let mut entries: Vec<_> = fs::read_dir(&set.dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        entries.sort();
        assert_eq!(
            entries,
            vec!["Contents.json", "particle_dust@2x.png", "particle_dust@3x.png"]
        );
    }

    #[test]
    fn test_write_fails_when_dir_blocked() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("blocked"), b"file").unwrap();
        let base = RgbaImage::new(4, 4);
        let err = Imageset::write(&temp.path().join("blocked"), "x", &base).unwrap_err();
        assert!(matches!(err, DitchError::Io { .. }));
    }

    #[test]
    fn test_density_tags() {
        assert_eq!(Density::X2.filename("cloud_1"), "cloud_1@2x.png");
        assert_eq!(Density::X3.tag(), "3x");
        assert_eq!(Density::X2.ratio(), (2, 3));
    }
}
