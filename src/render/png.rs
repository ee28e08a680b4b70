//! PNG output for rendered sprites.

use std::path::Path;

use image::RgbaImage;

use crate::error::{DitchError, Result};

/// Write an image to a PNG file.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<()> {
    image.save(path).map_err(|e| DitchError::Image {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })
}
