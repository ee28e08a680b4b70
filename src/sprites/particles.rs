//! Micro-particles for runtime effects (8-16px at export size).

use super::paint::dims;
use super::rng::SpriteRng;
use crate::canvas::{Draw, Surface};
use crate::types::{pt, BBox, Colour, Point};

/// Particle shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Particle {
    Splash,
    Dust,
    Grass,
    Star,
    Sparkle,
}

impl Particle {
    /// Every particle, in export order.
    pub const ALL: [Particle; 5] = [
        Particle::Splash,
        Particle::Dust,
        Particle::Grass,
        Particle::Star,
        Particle::Sparkle,
    ];

    /// Asset name.
    pub fn name(self) -> &'static str {
        match self {
            Particle::Splash => "particle_splash",
            Particle::Dust => "particle_dust",
            Particle::Grass => "particle_grass",
            Particle::Star => "particle_star",
            Particle::Sparkle => "particle_sparkle",
        }
    }

    /// Square export size in pixels.
    pub fn size(self) -> u32 {
        match self {
            Particle::Splash | Particle::Star => 16,
            Particle::Dust => 12,
            Particle::Grass | Particle::Sparkle => 8,
        }
    }

    pub fn draw(self, c: &mut dyn Surface, s: i32, _rng: &mut SpriteRng) {
        let (w, h) = dims(c);
        let (cx, cy) = (w / 2, h / 2);
        match self {
            Particle::Splash => {
                let water = Colour::new(100, 160, 240, 200);
                c.ellipse(BBox::new(cx - 5 * s, cy - 3 * s, cx + 5 * s, cy + 5 * s), water, None);
                c.polygon(
                    &[pt(cx, cy - 6 * s), pt(cx - 3 * s, cy - s), pt(cx + 3 * s, cy - s)],
                    water,
                    None,
                );
                c.ellipse(
                    BBox::new(cx - 2 * s, cy - s, cx + s, cy + s),
                    Colour::new(180, 220, 255, 180),
                    None,
                );
            }
            Particle::Dust => {
                c.ellipse(BBox::circle(cx, cy, 4 * s), Colour::new(160, 130, 80, 150), None);
                c.ellipse(BBox::circle(cx, cy, 2 * s), Colour::new(180, 150, 100, 100), None);
            }
            Particle::Grass => {
                c.polygon(
                    &[pt(cx - 2 * s, h - s), pt(cx + 2 * s, h - s), pt(cx + s, s), pt(cx - s, s)],
                    Colour::new(60, 160, 30, 180),
                    None,
                );
            }
            Particle::Star => {
                let points = star_points(cx, cy, 6 * s, 3 * s);
                c.polygon(&points, Colour::new(255, 220, 50, 230), None);
                let mut outline = points.clone();
                outline.push(points[0]);
                c.line(&outline, Colour::rgb(200, 170, 20), s.max(1));
            }
            Particle::Sparkle => {
                let r = 3 * s;
                c.ellipse(BBox::circle(cx, cy, r), Colour::new(255, 255, 255, 200), None);
                c.ellipse(BBox::circle(cx, cy, r / 2), Colour::new(255, 255, 255, 250), None);
            }
        }
    }
}

/// Ten-point star outline alternating outer and inner radii, first point up.
pub fn star_points(cx: i32, cy: i32, outer: i32, inner: i32) -> Vec<Point> {
    (0..10)
        .map(|i| {
            let angle = ((i * 36 - 90) as f32).to_radians();
            let r = if i % 2 == 0 { outer } else { inner } as f32;
            pt(cx + (angle.cos() * r) as i32, cy + (angle.sin() * r) as i32)
        })
        .collect()
}
