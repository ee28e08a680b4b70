//! Structural tiles: fence posts and rails, the gate and its post.

use super::paint::{dims, rimmed_rect};
use super::rng::SpriteRng;
use crate::canvas::{Draw, Surface};
use crate::types::{pt, BBox, Colour};

/// Vertical wooden post with random grain and a nail.
pub fn fence_post(c: &mut dyn Surface, s: i32, rng: &mut SpriteRng) {
    let (w, h) = dims(c);
    rimmed_rect(
        c,
        BBox::new(2 * s, 0, w - 2 * s, h),
        3 * s,
        Colour::rgb(140, 90, 45),
        Colour::rgb(90, 55, 25),
        2 * s,
    );

    for _ in 0..8 {
        let gx = rng.range(4 * s, w - 4 * s);
        let top = rng.range(0, h / 4);
        let drift = rng.range(-2 * s, 2 * s);
        let bottom = rng.range(h * 3 / 4, h);
        c.line(
            &[pt(gx, top), pt(gx + drift, bottom)],
            Colour::new(120, 75, 35, 80),
            s.max(1),
        );
    }

    c.ellipse(
        BBox::new(w / 2 - 2 * s, 6 * s, w / 2 + 2 * s, 10 * s),
        Colour::rgb(80, 80, 80),
        None,
    );
}

/// Horizontal rail with long grain streaks.
pub fn fence_rail(c: &mut dyn Surface, s: i32, rng: &mut SpriteRng) {
    let (w, h) = dims(c);
    rimmed_rect(
        c,
        BBox::new(0, 2 * s, w, h - 2 * s),
        2 * s,
        Colour::rgb(160, 105, 55),
        Colour::rgb(100, 65, 30),
        s,
    );

    for _ in 0..15 {
        let gy = rng.range(3 * s, h - 3 * s);
        let x0 = rng.range(0, w / 3);
        let x1 = rng.range(w * 2 / 3, w);
        c.line(&[pt(x0, gy), pt(x1, gy)], Colour::new(140, 85, 40, 60), s.max(1));
    }
}

/// Four-plank gate with a cross-brace and iron hinges.
pub fn gate_door(c: &mut dyn Surface, s: i32, _rng: &mut SpriteRng) {
    let (w, h) = dims(c);
    let plank_w = w / 4;
    for (i, shade) in [0, 10, -5, 8].into_iter().enumerate() {
        let px = i as i32 * plank_w;
        let plank = BBox::new(px + s, 2 * s, px + plank_w - s, h - 2 * s);
        c.rect(plank, Colour::rgb(150, 95, 45).offset(shade));
        c.rounded_rect_ring(plank, 0, Colour::rgb(100, 60, 25), s);
    }

    let brace = Colour::rgb(120, 70, 30);
    c.line(&[pt(4 * s, 4 * s), pt(w - 4 * s, h - 4 * s)], brace, 3 * s);
    c.line(&[pt(4 * s, h - 4 * s), pt(w - 4 * s, 4 * s)], brace, 3 * s);

    for ratio in [0.2f32, 0.8] {
        let hy = (h as f32 * ratio) as i32;
        c.rounded_rect(
            BBox::new(0, hy - 3 * s, 12 * s, hy + 3 * s),
            s,
            Colour::rgb(60, 60, 60),
            None,
        );
        c.ellipse(
            BBox::new(8 * s, hy - 2 * s, 12 * s, hy + 2 * s),
            Colour::rgb(50, 50, 50),
            None,
        );
    }
}

/// Heavy gate post topped with an iron cap.
pub fn gate_post(c: &mut dyn Surface, s: i32, rng: &mut SpriteRng) {
    let (w, h) = dims(c);
    rimmed_rect(
        c,
        BBox::new(3 * s, 8 * s, w - 3 * s, h),
        3 * s,
        Colour::rgb(120, 75, 35),
        Colour::rgb(80, 50, 20),
        2 * s,
    );

    for _ in 0..6 {
        let gx = rng.range(5 * s, w - 5 * s);
        let drift = rng.range(-s, s);
        c.line(
            &[pt(gx, 10 * s), pt(gx + drift, h - 5 * s)],
            Colour::new(100, 60, 25, 70),
            s.max(1),
        );
    }

    rimmed_rect(
        c,
        BBox::new(2 * s, 0, w - 2 * s, 12 * s),
        2 * s,
        Colour::rgb(70, 70, 70),
        Colour::rgb(40, 40, 40),
        s,
    );
    c.line(
        &[pt(5 * s, 3 * s), pt(w - 5 * s, 3 * s)],
        Colour::new(100, 100, 100, 150),
        s,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;

    #[test]
    fn test_fence_post_grain_seeded() {
        let render = |seed| {
            let mut canvas = Canvas::new(24 * 2, 120 * 2);
            fence_post(&mut canvas, 2, &mut SpriteRng::new(seed));
            canvas.into_image().into_raw()
        };
        assert_eq!(render(22), render(22));
        assert_ne!(render(22), render(23));
    }

    #[test]
    fn test_gate_door_hinge_colour() {
        let mut canvas = Canvas::new(240, 108);
        gate_door(&mut canvas, 1, &mut SpriteRng::new(0));
        // Hinge plate at 20% height, left edge.
        let hy = (108.0 * 0.2) as u32;
        assert_eq!(canvas.pixel(2, hy), Some(Colour::rgb(60, 60, 60)));
    }

    #[test]
    fn test_gate_post_cap_on_top() {
        let mut canvas = Canvas::new(36, 144);
        gate_post(&mut canvas, 1, &mut SpriteRng::new(44));
        assert_eq!(canvas.pixel(18, 6), Some(Colour::rgb(70, 70, 70)));
    }
}
