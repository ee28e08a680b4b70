//! Shape primitives over any [`Surface`].

use super::mask::Mask;
use super::text::{GlyphRun, Typeface};
use super::Surface;
use crate::types::{BBox, Colour, Point};

/// An outline colour and width in canvas pixels.
///
/// Callers pass widths already multiplied by the scale factor (`2 * s`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    pub colour: Colour,
    pub width: i32,
}

impl Stroke {
    pub const fn new(colour: Colour, width: i32) -> Self {
        Self { colour, width }
    }
}

/// Drawing primitives, available on every [`Surface`].
///
/// Shapes with a [`Stroke`] use the double-draw outline: the shape is first
/// drawn grown by the stroke width in the stroke colour, then drawn at its
/// exact size in the fill colour. Degenerate input is a silent no-op.
pub trait Draw: Surface {
    /// Filled axis-aligned rectangle.
    fn rect(&mut self, bbox: BBox, fill: Colour) {
        if let Some(mut mask) = Mask::clipped(
            self.width(),
            self.height(),
            bbox.x0,
            bbox.y0,
            bbox.x1,
            bbox.y1,
        ) {
            mask.fill_where(|_, _| true);
            mask.composite(self, fill);
        }
    }

    /// Filled ellipse inscribed in `bbox`, with optional double-draw outline.
    fn ellipse(&mut self, bbox: BBox, fill: Colour, stroke: Option<Stroke>) {
        if let Some(stroke) = stroke.filter(|s| s.width > 0) {
            if let Some(mask) = ellipse_mask(self, bbox.inflate(stroke.width)) {
                mask.composite(self, stroke.colour);
            }
        }
        if let Some(mask) = ellipse_mask(self, bbox) {
            mask.composite(self, fill);
        }
    }

    /// Outline-only ellipse: a ring `width` pixels thick inside `bbox`.
    fn ellipse_ring(&mut self, bbox: BBox, colour: Colour, width: i32) {
        if width <= 0 {
            return;
        }
        if let Some(mut outer) = ellipse_mask(self, bbox) {
            if let Some(inner) = bbox.inset(width).and_then(|b| ellipse_mask(self, b)) {
                outer.subtract(&inner);
            }
            outer.composite(self, colour);
        }
    }

    /// Filled rounded rectangle, with optional double-draw outline.
    ///
    /// Corners of the outline are rounded, not mitered.
    fn rounded_rect(&mut self, bbox: BBox, radius: i32, fill: Colour, stroke: Option<Stroke>) {
        if let Some(stroke) = stroke.filter(|s| s.width > 0) {
            if let Some(mask) = rounded_rect_mask(self, bbox.inflate(stroke.width), radius) {
                mask.composite(self, stroke.colour);
            }
        }
        if let Some(mask) = rounded_rect_mask(self, bbox, radius) {
            mask.composite(self, fill);
        }
    }

    /// Outline-only rounded rectangle. A radius of zero gives a plain frame.
    fn rounded_rect_ring(&mut self, bbox: BBox, radius: i32, colour: Colour, width: i32) {
        if width <= 0 {
            return;
        }
        if let Some(mut outer) = rounded_rect_mask(self, bbox, radius) {
            let inner = bbox
                .inset(width)
                .and_then(|b| rounded_rect_mask(self, b, (radius - width).max(0)));
            if let Some(inner) = inner {
                outer.subtract(&inner);
            }
            outer.composite(self, colour);
        }
    }

    /// Filled polygon with an optional one-pixel outline.
    ///
    /// Fewer than three points draws nothing.
    fn polygon(&mut self, points: &[Point], fill: Colour, outline: Option<Colour>) {
        if points.len() < 3 {
            return;
        }
        let centres: Vec<(f32, f32)> = points.iter().map(|p| centre(*p)).collect();
        if let Some(mut mask) = points_mask(self, points, 0) {
            mask.fill_polygon(&centres);
            mask.composite(self, fill);
        }
        if let Some(colour) = outline {
            let mut closed = points.to_vec();
            closed.push(points[0]);
            self.line(&closed, colour, 1);
        }
    }

    /// Polyline through `points`. Fewer than two points draws nothing;
    /// zero-length segments are skipped.
    fn line(&mut self, points: &[Point], colour: Colour, width: i32) {
        if points.len() < 2 {
            return;
        }
        let width = width.max(1);
        let Some(mut mask) = points_mask(self, points, width) else {
            return;
        };

        for seg in points.windows(2) {
            let (a, b) = (seg[0], seg[1]);
            if a == b {
                continue;
            }
            if width == 1 {
                mask.thin_segment(a.x, a.y, b.x, b.y);
            } else {
                mask.fill_polygon(&segment_quad(a, b, width as f32));
            }
        }
        mask.composite(self, colour);
    }

    /// Text centred on `anchor`, using the first available system font.
    ///
    /// See [`Draw::text_with`].
    fn text(&mut self, anchor: Point, text: &str, size: f32, fill: Colour, halo: Option<Stroke>) {
        let face = Typeface::resolve();
        self.text_with(&face, anchor, text, size, fill, halo);
    }

    /// Text centred on `anchor` with an explicit typeface.
    ///
    /// The halo stamps the text at every integer offset within a disk of
    /// radius `halo.width` in the halo colour, then the text is stamped once
    /// more in the fill colour.
    fn text_with(
        &mut self,
        face: &Typeface,
        anchor: Point,
        text: &str,
        size: f32,
        fill: Colour,
        halo: Option<Stroke>,
    ) {
        let Some(run) = face.layout(text, size) else {
            return;
        };

        if let Some(halo) = halo.filter(|h| h.width > 0) {
            if let Some(mask) = halo_mask(self, &run, anchor, halo) {
                mask.composite(self, halo.colour.with_alpha(255));
            }
        }
        if let Some(mask) = run_mask(self, &run, anchor) {
            mask.composite(self, fill);
        }
    }
}

impl<S: Surface + ?Sized> Draw for S {}

/// Map an integer point onto its pixel centre.
fn centre(p: Point) -> (f32, f32) {
    (p.x as f32 + 0.5, p.y as f32 + 0.5)
}

fn ellipse_mask<S: Surface + ?Sized>(surface: &S, bbox: BBox) -> Option<Mask> {
    if bbox.span_x() <= 0 || bbox.span_y() <= 0 {
        return None;
    }
    let (l, t, r, b) = bbox.area();
    let (cx, cy) = ((l + r) / 2.0, (t + b) / 2.0);
    let (rx, ry) = ((r - l) / 2.0, (b - t) / 2.0);

    let mut mask = Mask::for_region(surface, l, t, r, b)?;
    mask.fill_where(|x, y| {
        let nx = (x - cx) / rx;
        let ny = (y - cy) / ry;
        nx * nx + ny * ny <= 1.0
    });
    Some(mask)
}

fn rounded_rect_mask<S: Surface + ?Sized>(surface: &S, bbox: BBox, radius: i32) -> Option<Mask> {
    let (l, t, r, b) = bbox.area();
    let rad = (radius.max(0) as f32).min((r - l) / 2.0).min((b - t) / 2.0);

    let mut mask = Mask::for_region(surface, l, t, r, b)?;
    mask.fill_where(|x, y| {
        if x < l || x >= r || y < t || y >= b {
            return false;
        }
        // Distance to the nearest corner centre; zero inside the straight edges.
        let nx = x.clamp(l + rad, r - rad);
        let ny = y.clamp(t + rad, b - rad);
        let (dx, dy) = (x - nx, y - ny);
        dx * dx + dy * dy <= rad * rad
    });
    Some(mask)
}

fn points_mask<S: Surface + ?Sized>(surface: &S, points: &[Point], pad: i32) -> Option<Mask> {
    let min_x = points.iter().map(|p| p.x).min()?;
    let min_y = points.iter().map(|p| p.y).min()?;
    let max_x = points.iter().map(|p| p.x).max()?;
    let max_y = points.iter().map(|p| p.y).max()?;
    Mask::clipped(
        surface.width(),
        surface.height(),
        min_x - pad - 1,
        min_y - pad - 1,
        max_x + pad + 1,
        max_y + pad + 1,
    )
}

/// Rectangle of thickness `width` around the segment `a -> b`.
fn segment_quad(a: Point, b: Point, width: f32) -> [(f32, f32); 4] {
    let (ax, ay) = centre(a);
    let (bx, by) = centre(b);
    let (dx, dy) = (bx - ax, by - ay);
    let len = (dx * dx + dy * dy).sqrt();
    let (nx, ny) = (-dy / len * width / 2.0, dx / len * width / 2.0);
    [
        (ax + nx, ay + ny),
        (bx + nx, by + ny),
        (bx - nx, by - ny),
        (ax - nx, ay - ny),
    ]
}

fn run_mask<S: Surface + ?Sized>(surface: &S, run: &GlyphRun, anchor: Point) -> Option<Mask> {
    let left = anchor.x + run.offset_x;
    let top = anchor.y + run.offset_y;
    let mut mask = Mask::clipped(
        surface.width(),
        surface.height(),
        left,
        top,
        left + run.width as i32 - 1,
        top + run.height as i32 - 1,
    )?;
    for (x, y, cov) in run.covered() {
        mask.cover(left + x, top + y, cov);
    }
    Some(mask)
}

/// Combined coverage of the text stamped at every offset within the halo disk.
///
/// Stamping one colour `n` times with alphas `a_i` equals a single stamp with
/// alpha `1 - prod(1 - a_i)`, so the stamps are accumulated here and
/// composited once.
fn halo_mask<S: Surface + ?Sized>(
    surface: &S,
    run: &GlyphRun,
    anchor: Point,
    halo: Stroke,
) -> Option<Mask> {
    let r = halo.width;
    let left = anchor.x + run.offset_x;
    let top = anchor.y + run.offset_y;
    let (x0, y0) = (left - r, top - r);
    let (x1, y1) = (left + run.width as i32 - 1 + r, top + run.height as i32 - 1 + r);

    let mut mask = Mask::clipped(surface.width(), surface.height(), x0, y0, x1, y1)?;
    let (w, h) = ((x1 - x0 + 1) as usize, (y1 - y0 + 1) as usize);

    // Fraction of light passing through, in 1/255 units, per pixel.
    let mut remaining = vec![255u32; w * h];
    let covered: Vec<(i32, i32, u8)> = run.covered().collect();

    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy > r * r + 1 {
                continue;
            }
            for &(gx, gy, cov) in &covered {
                let lx = (gx + dx + r) as usize;
                let ly = (gy + dy + r) as usize;
                let a = (halo.colour.a as u32 * cov as u32 + 127) / 255;
                let slot = &mut remaining[ly * w + lx];
                *slot = (*slot * (255 - a) + 127) / 255;
            }
        }
    }

    for ly in 0..h {
        for lx in 0..w {
            let alpha = 255 - remaining[ly * w + lx];
            if alpha > 0 {
                mask.cover(x0 + lx as i32, y0 + ly as i32, alpha as u8);
            }
        }
    }
    Some(mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::types::pt;

    fn snapshot(canvas: &Canvas) -> Vec<u8> {
        canvas.image().as_raw().clone()
    }

    #[test]
    fn test_rect_inclusive() {
        let mut canvas = Canvas::new(8, 8);
        canvas.rect(BBox::new(2, 2, 4, 3), Colour::WHITE);
        assert_eq!(canvas.pixel(2, 2), Some(Colour::WHITE));
        assert_eq!(canvas.pixel(4, 3), Some(Colour::WHITE));
        assert_eq!(canvas.pixel(5, 3), Some(Colour::TRANSPARENT));
        assert_eq!(canvas.pixel(4, 4), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_rect_inverted_bounds_normalized() {
        let mut a = Canvas::new(8, 8);
        let mut b = Canvas::new(8, 8);
        a.rect(BBox::new(6, 6, 1, 1), Colour::WHITE);
        b.rect(BBox::new(1, 1, 6, 6), Colour::WHITE);
        assert_eq!(snapshot(&a), snapshot(&b));
    }

    #[test]
    fn test_ellipse_centre_and_corner() {
        let mut canvas = Canvas::new(20, 20);
        canvas.ellipse(BBox::new(2, 2, 17, 17), Colour::WHITE, None);
        assert_eq!(canvas.pixel(10, 10), Some(Colour::WHITE));
        assert_eq!(canvas.pixel(2, 2), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_ellipse_zero_radius_is_noop() {
        let mut canvas = Canvas::new(10, 10);
        canvas.ellipse(BBox::circle(5, 5, 0), Colour::WHITE, None);
        canvas.ellipse(BBox::circle(5, 5, -4), Colour::WHITE, None);
        assert!(canvas.image().pixels().all(|p| p.0[3] == 0));
    }

    #[test]
    fn test_ellipse_stroke_double_draw() {
        let mut canvas = Canvas::new(30, 30);
        let bbox = BBox::new(8, 8, 21, 21);
        canvas.ellipse(bbox, Colour::WHITE, Some(Stroke::new(Colour::BLACK, 3)));
        // Outline grows the shape outward; the exact shape is fill-coloured.
        assert_eq!(canvas.pixel(15, 15), Some(Colour::WHITE));
        assert_eq!(canvas.pixel(15, 6), Some(Colour::BLACK));
    }

    #[test]
    fn test_ellipse_ring_leaves_centre() {
        let mut canvas = Canvas::new(30, 30);
        canvas.ellipse_ring(BBox::new(2, 2, 27, 27), Colour::BLACK, 2);
        assert_eq!(canvas.pixel(15, 15), Some(Colour::TRANSPARENT));
        assert_eq!(canvas.pixel(15, 2), Some(Colour::BLACK));
    }

    #[test]
    fn test_rounded_rect_corner_is_cut() {
        let mut canvas = Canvas::new(20, 20);
        canvas.rounded_rect(BBox::new(0, 0, 19, 19), 6, Colour::WHITE, None);
        assert_eq!(canvas.pixel(0, 0), Some(Colour::TRANSPARENT));
        assert_eq!(canvas.pixel(10, 0), Some(Colour::WHITE));
        assert_eq!(canvas.pixel(10, 10), Some(Colour::WHITE));
    }

    #[test]
    fn test_rounded_rect_ring_zero_radius_is_frame() {
        let mut canvas = Canvas::new(10, 10);
        canvas.rounded_rect_ring(BBox::new(0, 0, 9, 9), 0, Colour::BLACK, 1);
        assert_eq!(canvas.pixel(0, 0), Some(Colour::BLACK));
        assert_eq!(canvas.pixel(9, 5), Some(Colour::BLACK));
        assert_eq!(canvas.pixel(5, 5), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_translucent_fill_draws_over() {
        let mut canvas = Canvas::new(4, 4);
        canvas.rect(BBox::new(0, 0, 3, 3), Colour::rgb(0, 0, 255));
        canvas.rect(BBox::new(0, 0, 3, 3), Colour::new(255, 0, 0, 128));
        let p = canvas.pixel(1, 1).unwrap();
        assert_eq!(p.a, 255);
        assert!(p.r > 100 && p.b > 100);
    }

    #[test]
    fn test_polygon_triangle_with_outline() {
        let mut canvas = Canvas::new(20, 20);
        let red = Colour::rgb(255, 0, 0);
        canvas.polygon(&[pt(2, 2), pt(17, 2), pt(10, 17)], red, Some(Colour::BLACK));
        assert_eq!(canvas.pixel(10, 6), Some(red));
        assert_eq!(canvas.pixel(2, 2), Some(Colour::BLACK));
        assert_eq!(canvas.pixel(1, 16), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_polygon_too_few_points_is_noop() {
        let mut canvas = Canvas::new(5, 5);
        canvas.polygon(&[pt(0, 0), pt(4, 4)], Colour::WHITE, Some(Colour::BLACK));
        assert!(canvas.image().pixels().all(|p| p.0[3] == 0));
    }

    #[test]
    fn test_line_short_polyline_is_noop() {
        let mut canvas = Canvas::new(5, 5);
        let before = snapshot(&canvas);
        canvas.line(&[], Colour::WHITE, 3);
        canvas.line(&[pt(2, 2)], Colour::WHITE, 3);
        assert_eq!(snapshot(&canvas), before);
    }

    #[test]
    fn test_line_zero_length_is_noop() {
        let mut canvas = Canvas::new(5, 5);
        canvas.line(&[pt(2, 2), pt(2, 2)], Colour::WHITE, 2);
        assert!(canvas.image().pixels().all(|p| p.0[3] == 0));
    }

    #[test]
    fn test_line_thick_horizontal() {
        let mut canvas = Canvas::new(20, 10);
        canvas.line(&[pt(2, 5), pt(17, 5)], Colour::WHITE, 4);
        assert_eq!(canvas.pixel(10, 5), Some(Colour::WHITE));
        assert_eq!(canvas.pixel(10, 4), Some(Colour::WHITE));
        assert_eq!(canvas.pixel(10, 9), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_line_translucent_joint_blends_once() {
        let mut canvas = Canvas::new(20, 20);
        let colour = Colour::new(255, 255, 255, 100);
        canvas.line(&[pt(2, 10), pt(10, 10), pt(10, 2)], colour, 4);
        assert_eq!(canvas.pixel(10, 10), Some(colour));
    }

    #[test]
    fn test_clipped_shapes_do_not_panic() {
        let mut canvas = Canvas::new(10, 10);
        canvas.ellipse(BBox::new(-50, -50, 5, 5), Colour::WHITE, None);
        canvas.line(&[pt(-20, -20), pt(30, 30)], Colour::WHITE, 3);
        canvas.rounded_rect(BBox::new(8, 8, 100, 100), 4, Colour::WHITE, None);
        canvas.rect(BBox::new(100, 100, 200, 200), Colour::WHITE);
        assert_eq!(canvas.pixel(0, 0), Some(Colour::WHITE));
    }

    #[test]
    fn test_text_bitmap_fallback_draws_centred() {
        let mut canvas = Canvas::new(80, 40);
        let face = Typeface::Bitmap;
        canvas.text_with(&face, pt(40, 20), "HI", 16.0, Colour::WHITE, None);
        let drawn = canvas.image().pixels().filter(|p| p.0[3] > 0).count();
        assert!(drawn > 0);
        // Nothing in the far corners.
        assert_eq!(canvas.pixel(0, 0), Some(Colour::TRANSPARENT));
        assert_eq!(canvas.pixel(79, 39), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_text_halo_surrounds_fill() {
        let face = Typeface::Bitmap;
        let mut plain = Canvas::new(80, 40);
        plain.text_with(&face, pt(40, 20), "I", 16.0, Colour::WHITE, None);
        let mut haloed = Canvas::new(80, 40);
        haloed.text_with(
            &face,
            pt(40, 20),
            "I",
            16.0,
            Colour::WHITE,
            Some(Stroke::new(Colour::BLACK, 2)),
        );

        let count = |c: &Canvas| c.image().pixels().filter(|p| p.0[3] > 0).count();
        assert!(count(&haloed) > count(&plain));

        let blacks = haloed.image().pixels().filter(|p| p.0 == [0, 0, 0, 255]).count();
        assert!(blacks > 0);
    }

    #[test]
    fn test_text_empty_string_is_noop() {
        let mut canvas = Canvas::new(10, 10);
        canvas.text_with(&Typeface::Bitmap, pt(5, 5), "", 8.0, Colour::WHITE, None);
        assert!(canvas.image().pixels().all(|p| p.0[3] == 0));
    }
}
