//! Rendering pipeline: supersampled drawing, resampling and PNG output.

mod png;
mod supersample;

pub use png::write_png;
pub use supersample::{
    check_supersample, derive_variant, downsample, render_sprite, SUPERSAMPLE, SUPERSAMPLE_RANGE,
};
