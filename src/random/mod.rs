// src/random/mod.rs
// The randomness seam. Everything that generates draws through the
// `RandomSource` trait, so tests can seed or script the sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform integer randomness injected into every generator.
///
/// Implementations must draw uniformly over the inclusive range. A
/// degenerate range (`lo > hi`) is a caller bug and must fail fast rather
/// than return a plausible-looking value.
pub trait RandomSource {
    /// Uniform draw from `[lo, hi]`, both bounds inclusive.
    fn rand_range(&mut self, lo: i64, hi: i64) -> i64;

    /// Fair coin.
    fn coin(&mut self) -> bool {
        self.rand_range(0, 1) == 1
    }
}

/// Default source backed by `rand`'s standard RNG.
#[derive(Debug, Clone)]
pub struct StdRandomSource {
    rng: StdRng,
}

impl StdRandomSource {
    /// Source seeded from operating-system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic source for reproducible composition and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for StdRandomSource {
    fn rand_range(&mut self, lo: i64, hi: i64) -> i64 {
        assert!(lo <= hi, "degenerate random range: [{lo}, {hi}]");
        self.rng.random_range(lo..=hi)
    }
}
