//! UI chrome: title, buttons, hearts, badges, banners and gate lights.
//!
//! Highlight and shadow tones are derived from a base colour with
//! [`Colour::offset`], which clamps every channel.

use super::paint::{dims, rimmed_ellipse, rimmed_rect};
use super::rng::SpriteRng;
use crate::canvas::{Draw, Stroke, Surface};
use crate::types::{pt, BBox, Colour};

/// Brightness step between a base colour and its highlight or shadow.
pub const SHADE_STEP: i32 = 40;

/// Title banner: "COWS IN THE DITCH".
pub fn title_logo(c: &mut dyn Surface, s: i32, _rng: &mut SpriteRng) {
    let (w, h) = dims(c);
    let (cx, cy) = (w / 2, h / 2);
    rimmed_rect(
        c,
        BBox::new(20 * s, 20 * s, w - 20 * s, h - 20 * s),
        20 * s,
        Colour::new(60, 130, 40, 200),
        Colour::rgb(40, 90, 25),
        3 * s,
    );

    let halo = Some(Stroke::new(Colour::rgb(40, 40, 40), 3 * s));
    c.text(pt(cx, cy - 12 * s), "COWS IN", (42 * s) as f32, Colour::WHITE, halo);
    c.text(
        pt(cx, cy + 30 * s),
        "THE DITCH",
        (48 * s) as f32,
        Colour::rgb(255, 230, 80),
        halo,
    );
}

/// Pill button with drop shadow, bevel highlight and a label.
pub fn button(c: &mut dyn Surface, s: i32, _rng: &mut SpriteRng, label: &str, base: Colour) {
    let (w, h) = dims(c);
    let (cx, cy) = (w / 2, h / 2);

    c.rounded_rect(
        BBox::new(8 * s, 12 * s, w - 8 * s, h - 4 * s),
        20 * s,
        Colour::new(0, 0, 0, 80),
        None,
    );
    rimmed_rect(
        c,
        BBox::new(8 * s, 8 * s, w - 8 * s, h - 12 * s),
        20 * s,
        base,
        base.offset(-SHADE_STEP),
        3 * s,
    );
    c.rounded_rect(
        BBox::new(16 * s, 12 * s, w - 16 * s, cy - 4 * s),
        14 * s,
        base.offset(SHADE_STEP).with_alpha(100),
        None,
    );

    c.text(
        pt(cx, cy - 4 * s),
        label,
        (40 * s) as f32,
        Colour::WHITE,
        Some(Stroke::new(Colour::new(0, 0, 0, 180), 3 * s)),
    );
}

/// Heart from two bumps and a point, drawn at `alpha` opacity.
pub fn heart(c: &mut dyn Surface, s: i32, _rng: &mut SpriteRng, base: Colour, alpha: u8) {
    let (w, h) = dims(c);
    let (cx, cy) = (w / 2, h / 2);
    let fill = base.with_alpha(alpha);
    let hr = 14 * s;

    let left = BBox::new(cx - hr * 2, cy - hr - 4 * s, cx, cy + hr / 2 - 4 * s);
    let right = BBox::new(cx, cy - hr - 4 * s, cx + hr * 2, cy + hr / 2 - 4 * s);
    c.ellipse(left, fill, None);
    c.ellipse(right, fill, None);
    c.polygon(
        &[
            pt(cx - hr * 2 + 2 * s, cy - 2 * s),
            pt(cx + hr * 2 - 2 * s, cy - 2 * s),
            pt(cx, cy + hr + 10 * s),
        ],
        fill,
        None,
    );

    let rim = base.offset(-60).with_alpha(alpha);
    c.ellipse_ring(left, rim, 2 * s);
    c.ellipse_ring(right, rim, 2 * s);

    let hl = 6 * s;
    c.ellipse(
        BBox::new(cx - 8 * s, cy - 10 * s, cx - 8 * s + hl * 2, cy - 10 * s + hl),
        Colour::WHITE.with_alpha(alpha / 2),
        None,
    );
}

/// Translucent backing panel for the score readout.
pub fn score_badge(c: &mut dyn Surface, s: i32, _rng: &mut SpriteRng) {
    let (w, h) = dims(c);
    rimmed_rect(
        c,
        BBox::new(4 * s, 4 * s, w - 4 * s, h - 4 * s),
        16 * s,
        Colour::new(40, 40, 60, 200),
        Colour::new(80, 80, 120, 200),
        2 * s,
    );
    c.rounded_rect(
        BBox::new(8 * s, 8 * s, w - 8 * s, h - 8 * s),
        14 * s,
        Colour::new(50, 50, 70, 100),
        None,
    );
}

/// "GAME OVER" banner.
pub fn game_over_banner(c: &mut dyn Surface, s: i32, _rng: &mut SpriteRng) {
    let (w, h) = dims(c);
    rimmed_rect(
        c,
        BBox::new(10 * s, 20 * s, w - 10 * s, h - 20 * s),
        16 * s,
        Colour::new(40, 15, 15, 230),
        Colour::rgb(180, 40, 40),
        3 * s,
    );
    c.text(
        pt(w / 2, h / 2),
        "GAME OVER",
        (56 * s) as f32,
        Colour::rgb(255, 60, 60),
        Some(Stroke::new(Colour::rgb(40, 10, 10), 4 * s)),
    );
}

/// Round status light with a glossy highlight.
pub fn gate_indicator(c: &mut dyn Surface, s: i32, _rng: &mut SpriteRng, base: Colour) {
    let (w, h) = dims(c);
    rimmed_ellipse(
        c,
        BBox::new(2 * s, 2 * s, w - 2 * s, h - 2 * s),
        Colour::rgb(40, 40, 40),
        Colour::rgb(80, 80, 80),
        2 * s,
    );
    c.ellipse(BBox::new(6 * s, 6 * s, w - 6 * s, h - 6 * s), base, None);
    c.ellipse(
        BBox::new(10 * s, 8 * s, w / 2, h / 2 - 2 * s),
        base.offset(2 * SHADE_STEP).with_alpha(140),
        None,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;

    #[test]
    fn test_button_body_and_shadow_tones() {
        let base = Colour::rgb(60, 180, 60);
        let mut canvas = Canvas::new(600, 180);
        button(&mut canvas, 1, &mut SpriteRng::new(0), "", base);
        // Body below the highlight band and clear of the label.
        assert_eq!(canvas.pixel(40, 140), Some(base));
        // Rim uses the darkened tone.
        assert_eq!(canvas.pixel(300, 9), Some(base.offset(-SHADE_STEP)));
    }

    #[test]
    fn test_heart_empty_is_translucent() {
        let mut canvas = Canvas::new(84, 78);
        heart(&mut canvas, 1, &mut SpriteRng::new(0), Colour::rgb(120, 120, 120), 100);
        let tip = canvas.pixel(42, 60).unwrap();
        assert!(tip.a > 0 && tip.a < 255);
    }

    #[test]
    fn test_heart_full_is_opaque_red() {
        let mut canvas = Canvas::new(84, 78);
        heart(&mut canvas, 1, &mut SpriteRng::new(0), Colour::rgb(220, 40, 40), 255);
        assert_eq!(canvas.pixel(42, 55), Some(Colour::rgb(220, 40, 40)));
        assert_eq!(canvas.pixel(0, 77), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_gate_indicator_highlight_clamped() {
        let mut canvas = Canvas::new(48, 48);
        gate_indicator(&mut canvas, 1, &mut SpriteRng::new(0), Colour::rgb(200, 40, 40));
        assert_eq!(canvas.pixel(24, 40), Some(Colour::rgb(200, 40, 40)));
        let gloss = canvas.pixel(16, 14).unwrap();
        assert_eq!(gloss.a, 255);
        assert!(gloss.r >= 200);
    }
}
