//! Integer random sources used for jitter, glances and interval scheduling.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Integer randomness with half-open bounds.
pub trait RandomSource {
    /// A value in `[min, max)`. When `min >= max` the result is `min`.
    fn random_range(&mut self, min: i32, max: i32) -> i32;

    /// Like [`random_range`](Self::random_range) for millisecond intervals.
    fn random_interval(&mut self, min_ms: u32, max_ms: u32) -> u64 {
        let min = i32::try_from(min_ms).unwrap_or(i32::MAX);
        let max = i32::try_from(max_ms).unwrap_or(i32::MAX);
        u64::from(self.random_range(min, max).max(0).unsigned_abs())
    }
}

/// [`RandomSource`] over any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wrap a generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Deterministic source, for tests and reproducible simulations.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from the operating system.
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn random_range(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.rng.random_range(min..max)
    }
}

/// Replays a fixed list of values, wrapping around. Each value is clamped
/// into the requested range so scripted runs stay within documented bounds.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<i32>,
    cursor: usize,
}

impl SequenceRandom {
    /// Replay `values` in order. An empty list always yields `min`.
    #[must_use]
    pub fn new(values: Vec<i32>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn random_range(&mut self, min: i32, max: i32) -> i32 {
        if min >= max || self.values.is_empty() {
            return min;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.wrapping_add(1);
        value.clamp(min, max - 1)
    }
}
