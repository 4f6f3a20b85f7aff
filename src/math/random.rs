//! Seeded pseudo-random source threaded through a whole wallpaper run

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Deterministic generator of uniform integers
///
/// Every draw advances the internal state, so callers must pass the same
/// source to each generation step in a fixed order. Two sources created from
/// the same seed yield identical sequences when drawn in the same order.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Create a source from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform integer in `[lo, hi)`
    ///
    /// Returns `None` without consuming a draw when the range is empty.
    pub fn integer(&mut self, lo: usize, hi: usize) -> Option<usize> {
        (lo < hi).then(|| self.rng.random_range(lo..hi))
    }

    /// Uniform 0 or 1
    pub fn bit(&mut self) -> u8 {
        self.rng.random_range(0..2)
    }

    /// Uniformly chosen element of a slice
    ///
    /// Consumes exactly one draw for a non-empty slice and none otherwise.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        self.integer(0, items.len())
            .and_then(|index| items.get(index))
    }
}
