//! Raster canvas and compositing primitives.
//!
//! [`Surface`] is the minimal drawable capability: a size and a
//! source-over pixel blend. [`Draw`] layers the shape primitives on top of
//! any surface, including `dyn Surface`, so sprite generators never see the
//! concrete canvas type.

mod draw;
mod mask;
mod text;

use image::RgbaImage;

use crate::types::Colour;

pub use draw::{Draw, Stroke};
pub use text::{Typeface, FONT_CANDIDATES};

/// A drawable RGBA surface.
pub trait Surface {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Composite `colour` over the pixel at `(x, y)`. Out-of-bounds is ignored.
    fn blend_pixel(&mut self, x: u32, y: u32, colour: Colour);
}

/// In-memory RGBA canvas, transparent on creation.
///
/// A canvas is owned by a single sprite render and consumed by the
/// resampler via [`Canvas::into_image`].
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    /// Read a pixel, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        self.image.get_pixel_checked(x, y).map(|p| Colour::from(*p))
    }

    /// Borrow the underlying image.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Consume the canvas, yielding its pixels.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

impl Surface for Canvas {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn blend_pixel(&mut self, x: u32, y: u32, colour: Colour) {
        if let Some(p) = self.image.get_pixel_mut_checked(x, y) {
            *p = Colour::from(*p).over(colour).into();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_transparent() {
        let canvas = Canvas::new(3, 2);
        assert_eq!(canvas.width(), 3);
        assert_eq!(canvas.height(), 2);
        assert_eq!(canvas.pixel(2, 1), Some(Colour::TRANSPARENT));
        assert_eq!(canvas.pixel(3, 0), None);
    }

    #[test]
    fn test_blend_pixel_out_of_bounds_ignored() {
        let mut canvas = Canvas::new(2, 2);
        canvas.blend_pixel(5, 5, Colour::WHITE);
        assert!(canvas.image().pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn test_blend_pixel_draws_over() {
        let mut canvas = Canvas::new(1, 1);
        canvas.blend_pixel(0, 0, Colour::rgb(0, 0, 255));
        canvas.blend_pixel(0, 0, Colour::new(255, 0, 0, 0));
        assert_eq!(canvas.pixel(0, 0), Some(Colour::rgb(0, 0, 255)));
    }
}
