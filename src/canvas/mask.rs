//! Coverage masks and scanline rasterization.
//!
//! Every primitive is rasterized into a [`Mask`] clipped to the surface,
//! then composited once. A pixel is covered when its centre lies inside
//! the shape.

use super::Surface;
use crate::types::Colour;

/// Per-pixel coverage (0..=255) over a clipped rectangle of the surface.
#[derive(Debug, Clone)]
pub(crate) struct Mask {
    x0: i32,
    y0: i32,
    width: usize,
    height: usize,
    coverage: Vec<u8>,
}

impl Mask {
    /// Allocate a mask for the pixel range `[x0, x1] x [y0, y1]`, clipped to
    /// a `surface_w x surface_h` surface. Returns `None` when nothing is visible.
    pub fn clipped(
        surface_w: u32,
        surface_h: u32,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
    ) -> Option<Self> {
        let x0 = x0.max(0);
        let y0 = y0.max(0);
        let x1 = x1.min(surface_w as i32 - 1);
        let y1 = y1.min(surface_h as i32 - 1);
        if x0 > x1 || y0 > y1 {
            return None;
        }

        let width = (x1 - x0 + 1) as usize;
        let height = (y1 - y0 + 1) as usize;
        Some(Self {
            x0,
            y0,
            width,
            height,
            coverage: vec![0; width * height],
        })
    }

    /// Mask covering a continuous region, sized to fit `(left, top, right, bottom)`.
    pub fn for_region<S: Surface + ?Sized>(
        surface: &S,
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
    ) -> Option<Self> {
        Self::clipped(
            surface.width(),
            surface.height(),
            left.floor() as i32 - 1,
            top.floor() as i32 - 1,
            right.ceil() as i32 + 1,
            bottom.ceil() as i32 + 1,
        )
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let lx = x - self.x0;
        let ly = y - self.y0;
        if lx < 0 || ly < 0 || lx as usize >= self.width || ly as usize >= self.height {
            return None;
        }
        Some(ly as usize * self.width + lx as usize)
    }

    /// Raise coverage at `(x, y)` to at least `value`. Out-of-range is ignored.
    pub fn cover(&mut self, x: i32, y: i32, value: u8) {
        if let Some(i) = self.index(x, y) {
            self.coverage[i] = self.coverage[i].max(value);
        }
    }

    /// Coverage at `(x, y)`, zero outside the mask.
    pub fn get(&self, x: i32, y: i32) -> u8 {
        self.index(x, y).map_or(0, |i| self.coverage[i])
    }

    /// Mark every pixel whose centre satisfies `inside`.
    pub fn fill_where(&mut self, inside: impl Fn(f32, f32) -> bool) {
        for ly in 0..self.height {
            let fy = (self.y0 + ly as i32) as f32 + 0.5;
            for lx in 0..self.width {
                let fx = (self.x0 + lx as i32) as f32 + 0.5;
                if inside(fx, fy) {
                    self.coverage[ly * self.width + lx] = 255;
                }
            }
        }
    }

    /// Clear every pixel covered in `other`.
    pub fn subtract(&mut self, other: &Mask) {
        for ly in 0..self.height {
            let y = self.y0 + ly as i32;
            for lx in 0..self.width {
                let x = self.x0 + lx as i32;
                if other.get(x, y) > 0 {
                    self.coverage[ly * self.width + lx] = 0;
                }
            }
        }
    }

    /// Even-odd scanline fill of a polygon given in pixel-centre space.
    pub fn fill_polygon(&mut self, points: &[(f32, f32)]) {
        if points.len() < 3 {
            return;
        }

        let mut crossings: Vec<f32> = Vec::new();
        for ly in 0..self.height {
            let y = self.y0 + ly as i32;
            let fy = y as f32 + 0.5;

            crossings.clear();
            for i in 0..points.len() {
                let (ax, ay) = points[i];
                let (bx, by) = points[(i + 1) % points.len()];
                if (ay <= fy && fy < by) || (by <= fy && fy < ay) {
                    crossings.push(ax + (fy - ay) / (by - ay) * (bx - ax));
                }
            }
            crossings.sort_by(f32::total_cmp);

            for pair in crossings.chunks_exact(2) {
                let start = (pair[0] - 0.5).ceil() as i32;
                let end = (pair[1] - 0.5).floor() as i32;
                for x in start..=end {
                    self.cover(x, y, 255);
                }
            }
        }
    }

    /// One-pixel Bresenham segment.
    pub fn thin_segment(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let (mut x, mut y) = (x0, y0);
        let mut err = dx + dy;

        loop {
            self.cover(x, y, 255);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Composite this mask onto `surface` in `colour`, scaling alpha by coverage.
    pub fn composite<S: Surface + ?Sized>(&self, surface: &mut S, colour: Colour) {
        if colour.is_transparent() {
            return;
        }
        for ly in 0..self.height {
            for lx in 0..self.width {
                let cov = self.coverage[ly * self.width + lx];
                if cov == 0 {
                    continue;
                }
                let a = (colour.a as u32 * cov as u32 + 127) / 255;
                surface.blend_pixel(
                    (self.x0 + lx as i32) as u32,
                    (self.y0 + ly as i32) as u32,
                    colour.with_alpha(a as u8),
                );
            }
        }
    }
}
