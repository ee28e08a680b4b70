//! Seeded pseudorandom stream for sprite generators.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Deterministic random stream, created fresh for every sprite render.
///
/// The same seed always yields the same sequence, so a sprite's pixels
/// depend only on its spec.
#[derive(Debug, Clone)]
pub struct SpriteRng {
    inner: Pcg32,
}

impl SpriteRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Pcg32::seed_from_u64(seed),
        }
    }

    /// Uniform integer in `lo..=hi`. Swapped bounds are normalized.
    pub fn range(&mut self, lo: i32, hi: i32) -> i32 {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        self.inner.random_range(lo..=hi)
    }

    /// Pick one element, or `None` for an empty slice.
    pub fn pick<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        Some(items[self.inner.random_range(0..items.len())])
    }
}
