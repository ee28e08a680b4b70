//! Environment tiles: grass backgrounds, ditch water frames and the ditch edge.

use super::paint::{dims, vertical_gradient};
use super::rng::SpriteRng;
use crate::canvas::{Draw, Surface};
use crate::types::{pt, BBox, Colour, Point};

/// Phase advance between consecutive water frames, in radians.
pub const WAVE_PHASE_STEP: f32 = 2.1;

const PETALS: [Colour; 4] = [
    Colour::rgb(255, 200, 50),
    Colour::rgb(255, 100, 100),
    Colour::rgb(200, 100, 255),
    Colour::rgb(255, 255, 255),
];

/// Scatter `n` grass blades with seed-controlled height, lean and shade.
fn blades(
    c: &mut dyn Surface,
    rng: &mut SpriteRng,
    n: usize,
    height: (i32, i32),
    lean: i32,
    colour: impl Fn(&mut SpriteRng) -> Colour,
    s: i32,
) {
    let (w, h) = dims(c);
    for _ in 0..n {
        let gx = rng.range(0, w);
        let gy = rng.range(0, h);
        let gh = rng.range(height.0, height.1);
        let dx = rng.range(-lean, lean);
        let colour = colour(rng);
        c.line(&[pt(gx, gy), pt(gx + dx, gy - gh)], colour, s.max(1));
    }
}

/// Open field: light green gradient with 200 shaded blades.
pub fn background_grass(c: &mut dyn Surface, s: i32, rng: &mut SpriteRng) {
    vertical_gradient(c, [60, 140, 30], [30, 40, 20]);
    blades(
        c,
        rng,
        200,
        (6 * s, 14 * s),
        3 * s,
        |rng| Colour::rgb(60, 160, 30).offset(rng.range(-20, 20)).with_alpha(120),
        s,
    );
}

/// Safe pasture: darker field with blades and five-petal flowers.
pub fn safe_pasture(c: &mut dyn Surface, s: i32, rng: &mut SpriteRng) {
    vertical_gradient(c, [40, 120, 20], [25, 30, 15]);
    blades(
        c,
        rng,
        150,
        (4 * s, 10 * s),
        2 * s,
        |_| Colour::new(50, 140, 25, 100),
        s,
    );

    let (w, h) = dims(c);
    for _ in 0..30 {
        let fx = rng.range(0, w);
        let fy = rng.range(0, h);
        let petal = rng.pick(&PETALS).unwrap_or(Colour::WHITE);
        let fr = rng.range(3 * s, 5 * s) as f32;
        for angle in (0..360).step_by(72) {
            let rad = (angle as f32).to_radians();
            let px = fx + (rad.cos() * fr) as i32;
            let py = fy + (rad.sin() * fr) as i32;
            c.ellipse(BBox::circle(px, py, 2 * s), petal, None);
        }
        c.ellipse(BBox::circle(fx, fy, 2 * s), Colour::rgb(255, 220, 50), None);
    }
}

/// Wave phase for an animation frame.
pub fn wave_phase(frame: u32) -> f32 {
    frame as f32 * WAVE_PHASE_STEP
}

/// One wave line across a `w`-wide tile, sampled every `4s` pixels.
pub fn wave_row(base_y: i32, w: i32, s: i32, phase: f32) -> Vec<Point> {
    (0..w)
        .step_by((4 * s).max(1) as usize)
        .map(|x| {
            let y = base_y + ((x as f32 / (30 * s) as f32 + phase).sin() * 4.0 * s as f32) as i32;
            pt(x, y)
        })
        .collect()
}

/// Ditch water animation frame. Frames share the wave field and differ
/// only by phase (and shimmer placement), so the set loops.
pub fn ditch_water(c: &mut dyn Surface, s: i32, rng: &mut SpriteRng, frame: u32) {
    let (w, h) = dims(c);
    vertical_gradient(c, [30, 60, 140], [20, 40, 40]);

    let phase = wave_phase(frame);
    for base_y in (0..h).step_by((12 * s).max(1) as usize) {
        let row = wave_row(base_y, w, s, phase);
        c.line(&row, Colour::new(80, 140, 220, 100), 2 * s);
    }

    for _ in 0..20 {
        let sx = rng.range(0, w);
        let sy = rng.range(0, h);
        let sw = rng.range(8 * s, 20 * s);
        c.ellipse(
            BBox::new(sx, sy, sx + sw, sy + 2 * s),
            Colour::new(150, 200, 255, 60),
            None,
        );
    }
}

/// Dirt strip along the ditch with a grass fringe along its top edge.
///
/// Blades grow upward from row 0, so only their roots land inside the tile.
pub fn ditch_edge(c: &mut dyn Surface, s: i32, rng: &mut SpriteRng) {
    let (w, h) = dims(c);
    c.rect(BBox::new(0, 0, w, h), Colour::rgb(120, 80, 40));

    for _ in 0..80 {
        let x = rng.range(0, w);
        let y = rng.range(0, h);
        let r = rng.range(s, 3 * s);
        let shade = rng.range(-20, 20);
        c.ellipse(BBox::circle(x, y, r), Colour::rgb(100, 60, 30).offset(shade), None);
    }

    for x in (0..w).step_by((3 * s).max(1) as usize) {
        let gh = rng.range(2 * s, 6 * s);
        let lean = rng.range(-s, s);
        c.line(&[pt(x, 0), pt(x + lean, -gh)], Colour::new(70, 150, 30, 180), s.max(1));
    }
}
