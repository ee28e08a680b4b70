//! Clouds.

use super::paint::dims;
use super::rng::SpriteRng;
use crate::canvas::{Draw, Surface};
use crate::types::{BBox, Colour};

/// Base puff layout as `(dx, dy, radius)` in unscaled units.
const PUFFS: [(i32, i32, i32); 7] = [
    (0, 0, 35),
    (-30, 5, 28),
    (25, 3, 30),
    (-15, -10, 25),
    (18, -8, 22),
    (35, 8, 20),
    (-38, 10, 18),
];

const HIGHLIGHTS: [(i32, i32, i32); 2] = [(-5, -12, 20), (10, -10, 18)];

/// Smallest puff radius after jitter, in unscaled units.
const MIN_PUFF: i32 = 12;

/// Puffy cloud. Variants jitter the puffs and grow with the variant number.
pub fn cloud(c: &mut dyn Surface, s: i32, rng: &mut SpriteRng, variant: u32) {
    let (w, h) = dims(c);
    let (cx, cy) = (w / 2, h / 2 + 10 * s);
    let growth = variant as i32 - 2;

    for (px, py, pr) in PUFFS {
        let px = px + rng.range(-5, 5);
        let py = py + rng.range(-3, 3);
        let pr = (pr + rng.range(-3, 3) + growth * 2).max(MIN_PUFF);

        let (x, y, r) = (cx + px * s, cy + py * s, pr * s);
        c.ellipse(BBox::circle(x, y + 4 * s, r), Colour::new(200, 200, 210, 40), None);
        c.ellipse(BBox::circle(x, y, r), Colour::new(255, 255, 255, 230), None);
    }

    for (px, py, pr) in HIGHLIGHTS {
        let r = (pr + growth) * s;
        c.ellipse(
            BBox::circle(cx + px * s, cy + py * s, r),
            Colour::new(255, 255, 255, 250),
            None,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;

    #[test]
    fn test_cloud_has_transparent_corners_and_white_core() {
        let mut canvas = Canvas::new(240, 120);
        cloud(&mut canvas, 1, &mut SpriteRng::new(77), 1);
        assert_eq!(canvas.pixel(0, 0), Some(Colour::TRANSPARENT));
        let core = canvas.pixel(120, 68).unwrap();
        assert!(core.a > 240);
        assert!(core.r > 240);
    }

    #[test]
    fn test_cloud_variants_grow() {
        let coverage = |variant: u32| {
            let mut canvas = Canvas::new(240, 120);
            cloud(&mut canvas, 1, &mut SpriteRng::new(0), variant);
            canvas.image().pixels().filter(|p| p.0[3] > 0).count()
        };
        assert!(coverage(3) > coverage(1));
    }
}
