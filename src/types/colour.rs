//! Colour type and channel arithmetic.

use image::Rgba;

/// An RGBA colour value (straight, non-premultiplied alpha).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Build an opaque colour from signed channels, clamping each into 0..=255.
    pub fn clamped(r: i32, g: i32, b: i32) -> Self {
        Self::rgb(clamp_channel(r), clamp_channel(g), clamp_channel(b))
    }

    /// Shift the RGB channels by `delta`, clamping to the valid range.
    ///
    /// Used for highlight (`+40`) and shadow (`-40`) variants of a base
    /// colour. Alpha is preserved.
    pub fn offset(self, delta: i32) -> Self {
        Self {
            r: clamp_channel(self.r as i32 + delta),
            g: clamp_channel(self.g as i32 + delta),
            b: clamp_channel(self.b as i32 + delta),
            a: self.a,
        }
    }

    /// Same colour with a different alpha.
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Convert to RGBA array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Check if the colour is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Composite `src` over `self` (Porter-Duff source-over).
    ///
    /// Integer arithmetic only, so the result is identical on every platform.
    pub fn over(self, src: Colour) -> Colour {
        match src.a {
            0 => return self,
            255 => return src,
            _ => {}
        }

        let sa = src.a as u32;
        let da = self.a as u32;
        let inv = 255 - sa;

        // Both terms are scaled by 255 so no precision is lost before the divide.
        let out_a = sa * 255 + da * inv;
        if out_a == 0 {
            return Colour::TRANSPARENT;
        }

        let channel = |s: u8, d: u8| -> u8 {
            ((s as u32 * sa * 255 + d as u32 * da * inv + out_a / 2) / out_a) as u8
        };

        Colour {
            r: channel(src.r, self.r),
            g: channel(src.g, self.g),
            b: channel(src.b, self.b),
            a: ((out_a + 127) / 255) as u8,
        }
    }
}

impl From<Rgba<u8>> for Colour {
    fn from(p: Rgba<u8>) -> Self {
        let [r, g, b, a] = p.0;
        Self { r, g, b, a }
    }
}

impl From<Colour> for Rgba<u8> {
    fn from(c: Colour) -> Self {
        Rgba(c.to_rgba())
    }
}

fn clamp_channel(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_clamps_high() {
        let c = Colour::rgb(230, 100, 255).offset(40);
        assert_eq!(c, Colour::rgb(255, 140, 255));
    }

    #[test]
    fn test_offset_clamps_low() {
        let c = Colour::new(20, 40, 60, 128).offset(-40);
        assert_eq!(c, Colour::new(0, 0, 20, 128));
    }

    #[test]
    fn test_offset_stays_in_range_for_all_seeds() {
        // Seed-driven shades in the generators fall in -80..=80.
        for base in [0u8, 1, 39, 40, 128, 215, 216, 254, 255] {
            for delta in -80..=80 {
                let c = Colour::rgb(base, base, base).offset(delta);
                let expected = (base as i32 + delta).clamp(0, 255) as u8;
                assert_eq!(c.r, expected);
            }
        }
    }

    #[test]
    fn test_clamped() {
        assert_eq!(Colour::clamped(-5, 300, 12), Colour::rgb(0, 255, 12));
    }

    #[test]
    fn test_over_opaque_replaces() {
        let dst = Colour::rgb(10, 20, 30);
        assert_eq!(dst.over(Colour::WHITE), Colour::WHITE);
    }

    #[test]
    fn test_over_transparent_keeps() {
        let dst = Colour::rgb(10, 20, 30);
        assert_eq!(dst.over(Colour::new(255, 0, 0, 0)), dst);
    }

    #[test]
    fn test_over_half_on_opaque() {
        let out = Colour::BLACK.over(Colour::new(255, 255, 255, 128));
        assert_eq!(out.a, 255);
        assert_eq!(out.r, 128);
    }

    #[test]
    fn test_over_onto_transparent_keeps_source() {
        let src = Colour::new(200, 100, 50, 90);
        assert_eq!(Colour::TRANSPARENT.over(src), src);
    }

    #[test]
    fn test_constants() {
        assert!(Colour::TRANSPARENT.is_transparent());
        assert_eq!(Colour::BLACK.a, 255);
        assert_eq!(Colour::WHITE.with_alpha(7).a, 7);
    }
}
