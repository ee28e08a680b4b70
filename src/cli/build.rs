//! Build command implementation.
//!
//! Renders each selected sprite and packages it into the asset catalog.
//! A failed sprite does not stop the batch; failures are collected and
//! reported together at the end.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::BuildConfig;
use crate::error::{DitchError, Result};
use crate::export::Imageset;
use crate::output::{display_path, plural, Printer};
use crate::render::render_sprite;
use crate::sprites::{Catalog, SpriteSpec};

/// Render every sprite into the asset catalog
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Config file (default: ./ditchgen.yaml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Asset catalog directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Only build the named sprite (repeatable)
    #[arg(long)]
    pub only: Vec<String>,
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub written: Vec<Imageset>,
    pub failures: Vec<(String, DitchError)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Convert into an error when any sprite failed.
    pub fn into_result(self) -> Result<usize> {
        if self.failures.is_empty() {
            return Ok(self.written.len());
        }
        Err(DitchError::Batch {
            failed: self.failures.len(),
            names: self.failures.into_iter().map(|(name, _)| name).collect(),
        })
    }
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let config = resolve_config(&args)?;
    let catalog = Catalog::standard();
    let sprites = catalog.select(config.only.as_deref())?;

    fs::create_dir_all(&config.output).map_err(|e| DitchError::Io {
        path: config.output.clone(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    let report = run_batch(&sprites, &config.output, config.supersample, printer);
    let written = report.into_result()?;

    printer.status(
        "Finished",
        &format!(
            "{} into {}",
            plural(written, "sprite", "sprites"),
            display_path(&config.output)
        ),
    );
    Ok(())
}

/// Merge the config file with command-line overrides.
fn resolve_config(args: &BuildArgs) -> Result<BuildConfig> {
    let mut config = BuildConfig::discover(args.config.as_deref(), Path::new("."))?;
    if let Some(output) = &args.output {
        config.output = output.clone();
    }
    if !args.only.is_empty() {
        config.only = Some(args.only.clone());
    }
    config.validate()?;
    Ok(config)
}

/// Render and package each sprite in order, continuing past failures.
pub fn run_batch(
    sprites: &[&SpriteSpec],
    out_dir: &Path,
    supersample: u32,
    printer: &Printer,
) -> BatchReport {
    let mut report = BatchReport::default();

    for sprite in sprites {
        printer.status("Generating", &sprite.to_string());
        let written = render_sprite(sprite, supersample)
            .and_then(|base| Imageset::write(out_dir, &sprite.name, &base));

        match written {
            Ok(set) => {
                printer.info("Wrote", &display_path(&set.dir));
                report.written.push(set);
            }
            Err(e) => {
                printer.error("Failed", &format!("{}: {}", sprite.name, e));
                report.failures.push((sprite.name.clone(), e));
            }
        }
    }

    report
}
