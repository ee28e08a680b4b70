//! Font resolution and glyph rasterization.
//!
//! Text never fails: when none of the candidate font files can be loaded,
//! the built-in 8x8 bitmap font is used instead.

use std::fs;
use std::path::Path;

use ab_glyph::{point, Font, FontVec, PxScale, ScaleFont};
use font8x8::UnicodeFonts;

/// Font files tried in order by [`Typeface::resolve`].
pub const FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/SFNSDisplay.ttf",
    "/System/Library/Fonts/SFNS.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

/// A resolved typeface.
pub enum Typeface {
    /// A TrueType/OpenType outline font.
    Outline(FontVec),
    /// The built-in 8x8 bitmap font, scaled in whole cells.
    Bitmap,
}

impl Typeface {
    /// Resolve the first loadable font from [`FONT_CANDIDATES`].
    pub fn resolve() -> Self {
        Self::resolve_from(FONT_CANDIDATES)
    }

    /// Resolve the first loadable font from `candidates`, or fall back to
    /// the bitmap font. Collections (`.ttc`) use their first face.
    pub fn resolve_from<P: AsRef<Path>>(candidates: impl IntoIterator<Item = P>) -> Self {
        for path in candidates {
            let Ok(bytes) = fs::read(path.as_ref()) else {
                continue;
            };
            if let Ok(font) = FontVec::try_from_vec_and_index(bytes, 0) {
                return Self::Outline(font);
            }
        }
        Self::Bitmap
    }

    /// Rasterize `text` at `size` pixels into a coverage run centred on the
    /// origin. Returns `None` for empty text or a non-positive size.
    pub(crate) fn layout(&self, text: &str, size: f32) -> Option<GlyphRun> {
        if text.is_empty() || size.is_nan() || size <= 0.0 {
            return None;
        }
        match self {
            Self::Outline(font) => layout_outline(font, text, size),
            Self::Bitmap => layout_bitmap(text, size),
        }
    }
}

/// Rasterized text: a coverage buffer plus its offset from the anchor.
#[derive(Debug, Clone)]
pub(crate) struct GlyphRun {
    /// Left edge relative to the anchor.
    pub offset_x: i32,
    /// Top edge relative to the anchor.
    pub offset_y: i32,
    pub width: usize,
    pub height: usize,
    coverage: Vec<u8>,
}

impl GlyphRun {
    fn new(offset_x: i32, offset_y: i32, width: usize, height: usize) -> Self {
        Self {
            offset_x,
            offset_y,
            width,
            height,
            coverage: vec![0; width * height],
        }
    }

    fn cover(&mut self, x: usize, y: usize, value: u8) {
        if x < self.width && y < self.height {
            let slot = &mut self.coverage[y * self.width + x];
            *slot = (*slot).max(value);
        }
    }

    /// Non-zero coverage as `(x, y, coverage)` in run-local coordinates.
    pub fn covered(&self) -> impl Iterator<Item = (i32, i32, u8)> + '_ {
        let width = self.width;
        self.coverage
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(move |(i, &c)| ((i % width) as i32, (i / width) as i32, c))
    }
}

/// Lay out an outline font, centred on the middle of the advance box and
/// halfway between ascender and descender.
fn layout_outline(font: &FontVec, text: &str, size: f32) -> Option<GlyphRun> {
    let scaled = font.as_scaled(PxScale::from(size));
    let ascent = scaled.ascent();

    let mut caret = 0.0f32;
    let mut previous = None;
    let mut outlined = Vec::new();
    for c in text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(prev) = previous {
            caret += scaled.kern(prev, id);
        }
        let glyph = id.with_scale_and_position(scaled.scale(), point(caret, ascent));
        caret += scaled.h_advance(id);
        previous = Some(id);
        if let Some(og) = font.outline_glyph(glyph) {
            outlined.push(og);
        }
    }

    if outlined.is_empty() {
        return None;
    }

    let left = outlined.iter().map(|g| g.px_bounds().min.x).fold(f32::MAX, f32::min).floor();
    let top = outlined.iter().map(|g| g.px_bounds().min.y).fold(f32::MAX, f32::min).floor();
    let right = outlined.iter().map(|g| g.px_bounds().max.x).fold(f32::MIN, f32::max).ceil();
    let bottom = outlined.iter().map(|g| g.px_bounds().max.y).fold(f32::MIN, f32::max).ceil();

    let centre_x = caret / 2.0;
    let centre_y = (ascent - scaled.descent()) / 2.0;

    let mut run = GlyphRun::new(
        (left - centre_x).round() as i32,
        (top - centre_y).round() as i32,
        (right - left) as usize,
        (bottom - top) as usize,
    );
    for og in &outlined {
        let bounds = og.px_bounds();
        let gx = (bounds.min.x - left) as usize;
        let gy = (bounds.min.y - top) as usize;
        og.draw(|x, y, c| {
            let value = (c.clamp(0.0, 1.0) * 255.0).round() as u8;
            run.cover(gx + x as usize, gy + y as usize, value);
        });
    }
    Some(run)
}

/// Lay out the 8x8 bitmap font, each font pixel scaled to a square cell.
fn layout_bitmap(text: &str, size: f32) -> Option<GlyphRun> {
    let cell = ((size / 8.0).round() as usize).max(1);
    let glyph_px = 8 * cell;
    let count = text.chars().count();

    let width = count * glyph_px;
    let mut run = GlyphRun::new(
        -((width / 2) as i32),
        -((glyph_px / 2) as i32),
        width,
        glyph_px,
    );

    for (i, c) in text.chars().enumerate() {
        let rows = font8x8::BASIC_FONTS
            .get(c)
            .or_else(|| font8x8::BASIC_FONTS.get('?'))
            .unwrap_or([0; 8]);
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..8 {
                if bits & (1 << col) == 0 {
                    continue;
                }
                for dy in 0..cell {
                    for dx in 0..cell {
                        run.cover(i * glyph_px + col * cell + dx, row * cell + dy, 255);
                    }
                }
            }
        }
    }
    Some(run)
}
