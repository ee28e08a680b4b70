//! Project configuration (ditchgen.yaml) parsing.
//!
//! The file is optional. Command-line flags override any value it sets.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DitchError, Result};
use crate::render::{check_supersample, SUPERSAMPLE};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILENAME: &str = "ditchgen.yaml";

/// Build settings loaded from ditchgen.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Asset catalog directory receiving the imagesets.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Supersample multiplier, from 2 to 16.
    #[serde(default = "default_supersample")]
    pub supersample: u32,

    /// Restrict the build to these sprites.
    #[serde(default)]
    pub only: Option<Vec<String>>,
}

fn default_output() -> PathBuf {
    PathBuf::from("Assets.xcassets")
}

fn default_supersample() -> u32 {
    SUPERSAMPLE
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            supersample: default_supersample(),
            only: None,
        }
    }
}

impl BuildConfig {
    /// Load config from a ditchgen.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DitchError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load an explicitly named file, or fall back to `ditchgen.yaml` in
    /// `dir` if present, or the defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let path = dir.join(CONFIG_FILENAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).map_err(|e| DitchError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the pipeline cannot honour.
    pub fn validate(&self) -> Result<()> {
        check_supersample(self.supersample)
    }
}
