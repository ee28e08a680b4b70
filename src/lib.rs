//! ditchgen - Procedural sprite generator for Cows in the Ditch
//!
//! Draws every game sprite at a supersampled resolution, filters it down with
//! Lanczos3 for smooth edges, and packages @2x/@3x variants into an asset
//! catalog with `Contents.json` manifests.

pub mod canvas;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod output;
pub mod render;
pub mod sprites;
pub mod types;

pub use canvas::{Canvas, Draw, Stroke, Surface, Typeface};
pub use config::BuildConfig;
pub use error::{DitchError, Result};
pub use export::{Contents, Density, Imageset};
pub use render::{
    check_supersample, derive_variant, downsample, render_sprite, write_png, SUPERSAMPLE,
    SUPERSAMPLE_RANGE,
};
pub use sprites::{Catalog, Particle, SpriteKind, SpriteRng, SpriteSpec};
pub use types::{pt, BBox, Colour, Point};
