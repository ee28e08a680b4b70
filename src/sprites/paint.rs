//! Drawing helpers shared by the sprite families.

use std::f32::consts::PI;

use crate::canvas::{Draw, Stroke, Surface};
use crate::types::{pt, BBox, Colour, Point};

/// Outline ink used on characters.
pub const INK: Colour = Colour::rgb(40, 40, 40);

/// Surface size as signed pixel dimensions.
pub fn dims(c: &dyn Surface) -> (i32, i32) {
    (c.width() as i32, c.height() as i32)
}

/// Fill the surface with a vertical gradient, one scanline at a time.
///
/// Row `y` gets `base + (y / h) * delta` per channel, truncated.
pub fn vertical_gradient(c: &mut dyn Surface, base: [i32; 3], delta: [i32; 3]) {
    let (w, h) = dims(c);
    if h <= 0 {
        return;
    }
    for y in 0..h {
        let t = y as f32 / h as f32;
        let channel = |i: usize| base[i] + (t * delta[i] as f32) as i32;
        c.rect(
            BBox::new(0, y, w, y),
            Colour::clamped(channel(0), channel(1), channel(2)),
        );
    }
}

/// Circle with a double-draw outline.
pub fn outlined_circle(
    c: &mut dyn Surface,
    cx: i32,
    cy: i32,
    r: i32,
    fill: Colour,
    stroke: Stroke,
) {
    c.ellipse(BBox::circle(cx, cy, r), fill, Some(stroke));
}

/// Ellipse filled, then rimmed inside its bounds.
pub fn rimmed_ellipse(c: &mut dyn Surface, bbox: BBox, fill: Colour, rim: Colour, width: i32) {
    c.ellipse(bbox, fill, None);
    c.ellipse_ring(bbox, rim, width);
}

/// Rounded rectangle filled, then rimmed inside its bounds.
pub fn rimmed_rect(
    c: &mut dyn Surface,
    bbox: BBox,
    radius: i32,
    fill: Colour,
    rim: Colour,
    width: i32,
) {
    c.rounded_rect(bbox, radius, fill, None);
    c.rounded_rect_ring(bbox, radius, rim, width);
}

/// Points along the elliptical arc inscribed in `bbox`.
///
/// Angles are in degrees, clockwise from three o'clock (y points down).
pub fn arc_points(bbox: BBox, start_deg: f32, end_deg: f32) -> Vec<Point> {
    const STEPS: usize = 24;
    let cx = (bbox.x0 + bbox.x1) as f32 / 2.0;
    let cy = (bbox.y0 + bbox.y1) as f32 / 2.0;
    let rx = bbox.span_x() as f32 / 2.0;
    let ry = bbox.span_y() as f32 / 2.0;

    (0..=STEPS)
        .map(|i| {
            let deg = start_deg + (end_deg - start_deg) * i as f32 / STEPS as f32;
            let rad = deg * PI / 180.0;
            pt(
                (cx + rad.cos() * rx).round() as i32,
                (cy + rad.sin() * ry).round() as i32,
            )
        })
        .collect()
}

/// Stroke an elliptical arc.
pub fn arc(
    c: &mut dyn Surface,
    bbox: BBox,
    start_deg: f32,
    end_deg: f32,
    colour: Colour,
    width: i32,
) {
    c.line(&arc_points(bbox, start_deg, end_deg), colour, width);
}

/// Cartoon eye: white, rim, pupil, catch-light.
///
/// `half` is the eye's half-size; `pupil` is the pupil box relative to the
/// eye centre.
pub fn eye(
    c: &mut dyn Surface,
    centre: Point,
    half: (i32, i32),
    pupil: (i32, i32, i32, i32),
    iris: Colour,
    s: i32,
) {
    let (ex, ey) = (centre.x, centre.y);
    let white = BBox::new(ex - half.0, ey - half.1, ex + half.0, ey + half.1);
    c.ellipse(white, Colour::WHITE, None);
    c.ellipse_ring(white, INK, s);
    c.ellipse(
        BBox::new(ex + pupil.0, ey + pupil.1, ex + pupil.2, ey + pupil.3),
        iris,
        None,
    );
    c.ellipse(BBox::new(ex - s, ey - 3 * s, ex + s, ey - s), Colour::WHITE, None);
}
