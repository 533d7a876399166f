//! Explicit random source threaded through every generation call
//!
//! A single source is shared by sequential calls, so draws from one section
//! shift every later section. Sources are not thread-safe; concurrent
//! generation needs one independent source per thread.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Stream of uniform samples consumed by layout and overlay generation
pub trait RandomSource {
    /// Uniform sample in `[0, 1)`
    fn next_float(&mut self) -> f32;

    /// Uniform integer in `[low, high)`
    ///
    /// Implementations return `low` when the range is empty.
    fn next_int_range(&mut self, low: i32, high: i32) -> i32;
}

/// Seeded random source for reproducible levels
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a deterministic random source
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_float(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    fn next_int_range(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        self.rng.random_range(low..high)
    }
}
