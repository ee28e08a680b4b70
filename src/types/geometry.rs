//! Integer geometry used by the drawing primitives.
//!
//! All coordinates are canvas pixels. Bounding boxes are inclusive on both
//! ends: `BBox::new(0, 0, 3, 3)` covers a 4x4 pixel area.

/// A point on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Shorthand for [`Point::new`].
pub const fn pt(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

/// An axis-aligned bounding box, always stored normalized (`x0 <= x1`, `y0 <= y1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BBox {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl BBox {
    /// Create a box from two corners. Inverted corners are swapped.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    /// Box around a circle. A negative radius is clamped to zero.
    pub fn circle(cx: i32, cy: i32, r: i32) -> Self {
        let r = r.max(0);
        Self::new(cx - r, cy - r, cx + r, cy + r)
    }

    /// Horizontal extent (`x1 - x0`); zero for a single column.
    pub fn span_x(&self) -> i32 {
        self.x1 - self.x0
    }

    /// Vertical extent (`y1 - y0`); zero for a single row.
    pub fn span_y(&self) -> i32 {
        self.y1 - self.y0
    }

    /// Grow the box by `d` on every side.
    pub fn inflate(&self, d: i32) -> Self {
        Self::new(self.x0 - d, self.y0 - d, self.x1 + d, self.y1 + d)
    }

    /// Shrink the box by `d` on every side, or `None` if nothing is left.
    pub fn inset(&self, d: i32) -> Option<Self> {
        let (x0, y0, x1, y1) = (self.x0 + d, self.y0 + d, self.x1 - d, self.y1 - d);
        (x0 <= x1 && y0 <= y1).then_some(Self { x0, y0, x1, y1 })
    }

    /// Continuous area covered, as `(left, top, right, bottom)`.
    pub(crate) fn area(&self) -> (f32, f32, f32, f32) {
        (
            self.x0 as f32,
            self.y0 as f32,
            (self.x1 + 1) as f32,
            (self.y1 + 1) as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_inverted() {
        let b = BBox::new(10, 20, 2, 4);
        assert_eq!(b, BBox { x0: 2, y0: 4, x1: 10, y1: 20 });
    }

    #[test]
    fn test_circle_negative_radius() {
        let b = BBox::circle(5, 5, -3);
        assert_eq!(b.span_x(), 0);
        assert_eq!(b.span_y(), 0);
    }

    #[test]
    fn test_inflate_and_inset() {
        let b = BBox::new(10, 10, 20, 20);
        assert_eq!(b.inflate(2), BBox::new(8, 8, 22, 22));
        assert_eq!(b.inset(5), Some(BBox::new(15, 15, 15, 15)));
        assert_eq!(b.inset(6), None);
    }
}
