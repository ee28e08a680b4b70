//! Character sprites: the walking cow, the drowning cow and the farmer.

use std::f32::consts::PI;

use super::paint::{arc, dims, eye, outlined_circle, rimmed_ellipse, rimmed_rect, INK};
use super::rng::SpriteRng;
use crate::canvas::{Draw, Stroke, Surface};
use crate::types::{pt, BBox, Colour, Point};

const SPOT: Colour = Colour::rgb(30, 30, 30);
const HORN: Colour = Colour::rgb(220, 190, 130);
const PUPIL: Colour = Colour::rgb(20, 20, 20);

/// Number of samples along the cow's tail.
pub const TAIL_POINTS: usize = 20;

/// Tail polyline: one sine period curling up and back over 12s by 15s.
pub fn tail_points(tx: i32, ty: i32, s: i32) -> Vec<Point> {
    (0..TAIL_POINTS)
        .map(|i| {
            let t = i as f32 / (TAIL_POINTS - 1) as f32;
            let x = tx + (t * 12.0 * s as f32) as i32;
            let wave = ((t * PI * 2.0).sin() * 8.0 * s as f32) as i32;
            let y = ty + wave - (t * 15.0 * s as f32) as i32;
            pt(x, y)
        })
        .collect()
}

/// Horn triangle at `hx`, tip leaning outward on the `side` (-1 or 1).
fn horn(c: &mut dyn Surface, hx: i32, side: i32, base_y: i32, tip_y: i32, s: i32) {
    let lean = side.signum() * 3 * s;
    c.polygon(
        &[pt(hx - 3 * s, base_y), pt(hx + lean, tip_y), pt(hx + 3 * s, base_y)],
        HORN,
        Some(INK),
    );
}

/// Scatter `n` flattened hide spots around `(cx, cy)`.
///
/// `spread` is `(dx, dy_lo, dy_hi)`; `size` bounds the spot radius.
fn spots(
    c: &mut dyn Surface,
    rng: &mut SpriteRng,
    (cx, cy): (i32, i32),
    n: usize,
    spread: (i32, i32, i32),
    size: (i32, i32),
    alpha: u8,
) {
    let (dx, dy_lo, dy_hi) = spread;
    for _ in 0..n {
        let sx = cx + rng.range(-dx, dx);
        let sy = cy + rng.range(dy_lo, dy_hi);
        let sr = rng.range(size.0, size.1);
        c.ellipse(
            BBox::new(sx - sr, sy - sr / 2, sx + sr, sy + sr / 2),
            SPOT.with_alpha(alpha),
            None,
        );
    }
}

/// Side-on cow mid-walk. The variant only changes the spot pattern.
pub fn cow_walk(c: &mut dyn Surface, s: i32, rng: &mut SpriteRng) {
    let (w, h) = dims(c);
    let (cx, cy) = (w / 2, h / 2);

    let (bw, bh) = (48 * s, 34 * s);
    c.ellipse(
        BBox::new(cx - bw, cy - bh + 4 * s, cx + bw, cy + bh + 4 * s),
        Colour::WHITE,
        Some(Stroke::new(INK, 2 * s)),
    );
    spots(c, rng, (cx, cy), 4, (30 * s, -15 * s, 15 * s), (6 * s, 12 * s), 200);

    for lx in [-28, -10, 10, 28] {
        let lx = cx + lx * s;
        let (top, bottom) = (cy + 20 * s, cy + 40 * s);
        c.rounded_rect(
            BBox::new(lx - 4 * s, top, lx + 4 * s, bottom),
            2 * s,
            Colour::rgb(60, 60, 60),
            None,
        );
        c.rounded_rect(
            BBox::new(lx - 5 * s, bottom - 4 * s, lx + 5 * s, bottom + 2 * s),
            2 * s,
            Colour::rgb(80, 60, 40),
            None,
        );
    }

    let head_cy = cy - 26 * s;
    outlined_circle(c, cx, head_cy, 16 * s, Colour::WHITE, Stroke::new(INK, 2 * s));
    c.ellipse(
        BBox::new(cx - 10 * s, head_cy + 2 * s, cx + 10 * s, head_cy + 14 * s),
        Colour::rgb(255, 210, 180),
        Some(Stroke::new(INK, s)),
    );
    for nx in [(-5, -2), (2, 5)] {
        c.ellipse(
            BBox::new(cx + nx.0 * s, head_cy + 6 * s, cx + nx.1 * s, head_cy + 10 * s),
            Colour::rgb(80, 50, 50),
            None,
        );
    }

    for ex in [-7, 7] {
        let pupil = (-2 * s, -3 * s, 2 * s, 3 * s);
        eye(c, pt(cx + ex * s, head_cy - 4 * s), (5 * s, 5 * s), pupil, PUPIL, s);
    }

    for hx in [-10, 10] {
        horn(c, cx + hx * s, hx, head_cy - 10 * s, head_cy - 22 * s, s);
    }

    for side in [-1, 1] {
        let (ear_x, ear_y) = (cx + side * 15 * s, head_cy - 6 * s);
        rimmed_ellipse(
            c,
            BBox::new(ear_x - 5 * s, ear_y - 3 * s, ear_x + 5 * s, ear_y + 3 * s),
            Colour::rgb(255, 220, 200),
            INK,
            s,
        );
    }

    let tail = tail_points(cx + 46 * s, cy - 5 * s, s);
    c.line(&tail, Colour::rgb(60, 60, 60), 2 * s);
    if let Some(tip) = tail.last() {
        c.ellipse(BBox::circle(tip.x, tip.y, 4 * s), SPOT, None);
    }
}

/// Cow sinking in ditch water, wide-eyed.
pub fn cow_drowning(c: &mut dyn Surface, s: i32, rng: &mut SpriteRng) {
    let (w, h) = dims(c);
    let (cx, cy) = (w / 2, h / 2 - 8 * s);

    let water_y = h / 2 + 10 * s;
    c.rect(BBox::new(0, water_y, w, h), Colour::new(50, 90, 160, 180));
    for wx in (0..w).step_by((8 * s).max(1) as usize) {
        let wy = water_y + ((wx as f32 / (12 * s) as f32).sin() * 3.0 * s as f32) as i32;
        c.ellipse(
            BBox::new(wx, wy - 2 * s, wx + 6 * s, wy + 2 * s),
            Colour::new(80, 140, 220, 200),
            None,
        );
    }

    let (bw, bh) = (42 * s, 24 * s);
    c.ellipse(
        BBox::new(cx - bw, cy - bh, cx + bw, cy + bh),
        Colour::WHITE,
        Some(Stroke::new(INK, 2 * s)),
    );
    spots(c, rng, (cx, cy), 3, (25 * s, -10 * s, 5 * s), (5 * s, 10 * s), 180);

    let head_cy = cy - 20 * s;
    outlined_circle(c, cx, head_cy, 14 * s, Colour::WHITE, Stroke::new(INK, 2 * s));

    for ex in [-6, 6] {
        let pupil = (-2 * s, -2 * s, 2 * s, 4 * s);
        eye(c, pt(cx + ex * s, head_cy - 2 * s), (5 * s, 6 * s), pupil, PUPIL, s);
    }

    arc(
        c,
        BBox::new(cx - 8 * s, head_cy + 4 * s, cx + 8 * s, head_cy + 14 * s),
        0.0,
        180.0,
        INK,
        2 * s,
    );

    for hx in [-9, 9] {
        horn(c, cx + hx * s, hx, head_cy - 8 * s, head_cy - 18 * s, s);
    }
}

/// The farmer in overalls and a cowboy hat.
pub fn farmer(c: &mut dyn Surface, s: i32, _rng: &mut SpriteRng) {
    let (w, h) = dims(c);
    let (cx, cy) = (w / 2, h / 2);

    for lx in [-12, 12] {
        let lx = cx + lx * s;
        c.rounded_rect(
            BBox::new(lx - 6 * s, cy + 36 * s, lx + 6 * s, cy + 65 * s),
            3 * s,
            Colour::rgb(50, 80, 140),
            None,
        );
        rimmed_rect(
            c,
            BBox::new(lx - 7 * s, cy + 58 * s, lx + 8 * s, cy + 68 * s),
            2 * s,
            Colour::rgb(100, 60, 30),
            Colour::rgb(60, 40, 20),
            1,
        );
    }

    let denim = Colour::rgb(40, 80, 150);
    let seam = Colour::rgb(30, 60, 120);
    c.ellipse(
        BBox::new(cx - 24 * s, cy - 10 * s, cx + 24 * s, cy + 42 * s),
        Colour::rgb(50, 100, 180),
        Some(Stroke::new(seam, 2 * s)),
    );
    c.line(&[pt(cx - 16 * s, cy - 6 * s), pt(cx - 8 * s, cy + 10 * s)], denim, 3 * s);
    c.line(&[pt(cx + 16 * s, cy - 6 * s), pt(cx + 8 * s, cy + 10 * s)], denim, 3 * s);
    let pocket = BBox::new(cx - 8 * s, cy + 16 * s, cx + 8 * s, cy + 28 * s);
    rimmed_rect(c, pocket, 2 * s, denim, seam, s);

    let skin = Colour::rgb(220, 170, 120);
    for side in [-1, 1] {
        let ax = cx + side * 28 * s;
        rimmed_rect(
            c,
            BBox::new(ax - 6 * s, cy, ax + 6 * s, cy + 30 * s),
            3 * s,
            Colour::rgb(210, 160, 110),
            Colour::rgb(160, 110, 60),
            1,
        );
        c.ellipse(BBox::new(ax - 7 * s, cy + 26 * s, ax + 7 * s, cy + 36 * s), skin, None);
    }

    let head_cy = cy - 28 * s;
    outlined_circle(c, cx, head_cy, 22 * s, skin, Stroke::new(Colour::rgb(180, 130, 80), 2 * s));

    for ex in [-9, 9] {
        eye(
            c,
            pt(cx + ex * s, head_cy - 2 * s),
            (5 * s, 6 * s),
            (-2 * s, -2 * s, 2 * s, 3 * s),
            Colour::rgb(50, 100, 50),
            s,
        );
    }

    arc(
        c,
        BBox::new(cx - 10 * s, head_cy + 4 * s, cx + 10 * s, head_cy + 16 * s),
        10.0,
        170.0,
        INK,
        2 * s,
    );
    c.ellipse(
        BBox::new(cx - 3 * s, head_cy + s, cx + 3 * s, head_cy + 6 * s),
        Colour::rgb(200, 150, 100),
        None,
    );

    let hat_cy = head_cy - 24 * s;
    rimmed_ellipse(
        c,
        BBox::new(cx - 32 * s, hat_cy - 2 * s, cx + 32 * s, hat_cy + 10 * s),
        Colour::rgb(140, 90, 40),
        Colour::rgb(90, 60, 20),
        s,
    );
    rimmed_rect(
        c,
        BBox::new(cx - 18 * s, hat_cy - 20 * s, cx + 18 * s, hat_cy + 4 * s),
        4 * s,
        Colour::rgb(160, 100, 40),
        Colour::rgb(100, 65, 25),
        s,
    );
    c.rect(
        BBox::new(cx - 18 * s, hat_cy - 4 * s, cx + 18 * s, hat_cy + s),
        Colour::rgb(180, 40, 40),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;

    #[test]
    fn test_tail_points_shape() {
        let s = 4;
        let points = tail_points(100, 50, s);
        assert_eq!(points.len(), TAIL_POINTS);
        assert_eq!(points[0], pt(100, 50));
        // Ends 12s to the right and 15s up after one full sine period.
        let last = points[TAIL_POINTS - 1];
        assert_eq!(last.x, 100 + 12 * s);
        assert!((last.y - (50 - 15 * s)).abs() <= 1);
    }

    #[test]
    fn test_cow_walk_variants_differ() {
        let render = |seed: u64| {
            let mut canvas = Canvas::new(156, 132);
            cow_walk(&mut canvas, 1, &mut SpriteRng::new(seed));
            canvas.into_image().into_raw()
        };
        assert_ne!(render(42), render(84));
        assert_eq!(render(42), render(42));
    }

    #[test]
    fn test_farmer_draws_hat_band() {
        let mut canvas = Canvas::new(180, 216);
        farmer(&mut canvas, 1, &mut SpriteRng::new(0));
        // Hat band sits 52px above centre.
        assert_eq!(canvas.pixel(90, 108 - 52 - 2), Some(Colour::rgb(180, 40, 40)));
    }
}
