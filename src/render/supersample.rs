//! Supersampled rendering and Lanczos downsampling.
//!
//! A sprite is drawn at `S` times its export size and filtered down, which
//! gives smooth edges without any per-primitive anti-aliasing. The @2x
//! variant is always filtered from the resampled @3x base, never from the
//! supersampled canvas.

use std::ops::RangeInclusive;

use image::imageops::{self, FilterType};
use image::{ImageBuffer, Rgba, Rgba32FImage, RgbaImage};

use crate::canvas::Canvas;
use crate::error::{DitchError, Result};
use crate::sprites::{SpriteRng, SpriteSpec};

/// Default supersample multiplier.
pub const SUPERSAMPLE: u32 = 4;

/// Supersample multipliers accepted by [`render_sprite`].
pub const SUPERSAMPLE_RANGE: RangeInclusive<u32> = 2..=16;

/// Reject multipliers outside [`SUPERSAMPLE_RANGE`].
pub fn check_supersample(supersample: u32) -> Result<()> {
    if SUPERSAMPLE_RANGE.contains(&supersample) {
        return Ok(());
    }
    Err(DitchError::Config {
        message: format!(
            "supersample must be between {} and {}, got {}",
            SUPERSAMPLE_RANGE.start(),
            SUPERSAMPLE_RANGE.end(),
            supersample
        ),
        help: Some("Rendering must happen above the @3x export size".to_string()),
    })
}

/// Render a sprite at its @3x size.
///
/// Allocates a `W*S x H*S` canvas, runs the generator with `s = S` and a
/// fresh random stream seeded from the sprite, then downsamples to `W x H`.
pub fn render_sprite(spec: &SpriteSpec, supersample: u32) -> Result<RgbaImage> {
    check_supersample(supersample)?;
    let scaled = |n: u32| {
        n.checked_mul(supersample).ok_or_else(|| DitchError::Config {
            message: format!("{} is too large to render at {}x", spec, supersample),
            help: None,
        })
    };
    let mut canvas = Canvas::new(scaled(spec.width)?, scaled(spec.height)?);
    let mut rng = SpriteRng::new(spec.seed());
    spec.kind.draw(&mut canvas, supersample as i32, &mut rng);
    Ok(downsample(&canvas.into_image(), spec.width, spec.height))
}

/// Filter `base` down by `num/den`, flooring each dimension.
pub fn derive_variant(base: &RgbaImage, num: u32, den: u32) -> RgbaImage {
    let den = den.max(1);
    let width = base.width() * num / den;
    let height = base.height() * num / den;
    downsample(base, width, height)
}

/// Lanczos3 resample with premultiplied alpha.
///
/// Colour is weighted by alpha while filtering so transparent pixels
/// (stored as black) do not darken anti-aliased edges.
pub fn downsample(image: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    if width == 0 || height == 0 || image.width() == 0 || image.height() == 0 {
        return RgbaImage::new(width, height);
    }

    let premultiplied: Rgba32FImage = ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0;
        let alpha = f32::from(a) / 255.0;
        Rgba([
            f32::from(r) / 255.0 * alpha,
            f32::from(g) / 255.0 * alpha,
            f32::from(b) / 255.0 * alpha,
            alpha,
        ])
    });

    let resized = imageops::resize(&premultiplied, width, height, FilterType::Lanczos3);

    ImageBuffer::from_fn(width, height, |x, y| unpremultiply(resized.get_pixel(x, y)))
}

fn unpremultiply(pixel: &Rgba<f32>) -> Rgba<u8> {
    let [r, g, b, a] = pixel.0;
    let alpha = a.clamp(0.0, 1.0);
    if alpha <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }
    let channel = |c: f32| ((c / alpha).clamp(0.0, 1.0) * 255.0).round() as u8;
    Rgba([channel(r), channel(g), channel(b), (alpha * 255.0).round() as u8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprites::{Catalog, SpriteKind};

    fn sprite(name: &str) -> SpriteSpec {
        Catalog::standard().get(name).cloned().unwrap()
    }

    #[test]
    fn test_render_matches_declared_size() {
        let heart = sprite("heart_full");
        let image = render_sprite(&heart, SUPERSAMPLE).unwrap();
        assert_eq!(image.dimensions(), (84, 78));
    }

    #[test]
    fn test_render_is_deterministic() {
        let edge = sprite("ditch_edge");
        let a = render_sprite(&edge, 2).unwrap();
        let b = render_sprite(&edge, 2).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_render_rejects_low_supersample() {
        let heart = sprite("heart_full");
        for supersample in [0, 1] {
            let err = render_sprite(&heart, supersample).unwrap_err();
            assert!(matches!(err, DitchError::Config { .. }));
        }
    }

    #[test]
    fn test_render_rejects_oversized_supersample() {
        let heart = sprite("heart_full");
        assert!(render_sprite(&heart, 17).is_err());
        assert!(render_sprite(&heart, u32::MAX).is_err());
    }

    #[test]
    fn test_render_rejects_overflowing_canvas() {
        let huge = SpriteSpec::new("huge", u32::MAX / 2, 8, SpriteKind::ScoreBadge);
        let err = render_sprite(&huge, 4).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_derive_variant_floors() {
        let base = RgbaImage::new(84, 78);
        assert_eq!(derive_variant(&base, 2, 3).dimensions(), (56, 52));

        let base = RgbaImage::new(100, 50);
        assert_eq!(derive_variant(&base, 2, 3).dimensions(), (66, 33));

        let base = RgbaImage::new(1, 1);
        assert_eq!(derive_variant(&base, 2, 3).dimensions(), (0, 0));
    }

    #[test]
    fn test_downsample_solid_colour_is_stable() {
        let image = RgbaImage::from_pixel(32, 32, Rgba([200, 100, 50, 255]));
        let small = downsample(&image, 8, 8);
        for p in small.pixels() {
            assert_eq!(p.0[3], 255);
            assert!(p.0[0].abs_diff(200) <= 1);
            assert!(p.0[1].abs_diff(100) <= 1);
            assert!(p.0[2].abs_diff(50) <= 1);
        }
    }

    #[test]
    fn test_downsample_edges_do_not_darken() {
        let image = ImageBuffer::from_fn(64, 64, |x, _| {
            if x < 32 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        });
        let small = downsample(&image, 16, 16);
        for p in small.pixels().filter(|p| p.0[3] > 0) {
            assert_eq!(p.0[0], 255);
            assert_eq!(p.0[1], 0);
        }
    }

    #[test]
    fn test_water_frames_same_size_distinct_pixels() {
        let frames: Vec<RgbaImage> = (1..=3)
            .map(|f| render_sprite(&sprite(&format!("ditch_water_{f}")), 2).unwrap())
            .collect();
        for frame in &frames {
            assert_eq!(frame.dimensions(), (512, 160));
        }
        assert_ne!(frames[0].as_raw(), frames[1].as_raw());
        assert_ne!(frames[1].as_raw(), frames[2].as_raw());
        assert_ne!(frames[0].as_raw(), frames[2].as_raw());
    }

    #[test]
    fn test_empty_target_is_empty_image() {
        let image = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255]));
        assert_eq!(downsample(&image, 0, 3).dimensions(), (0, 3));
    }
}
