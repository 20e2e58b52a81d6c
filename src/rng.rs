//! Random signal selection.
//!
//! Wraps a seedable ChaCha8 generator so tests can fix the draw order while
//! production callers seed from entropy. Selection is uniform with
//! replacement; repeating the previous signal is allowed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::signal::Signal;

/// Uniform signal source for sequence generation.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create an RNG with a fixed seed. Same seed, same signal order.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Draw one signal uniformly from the fixed signal set.
    pub fn next_signal(&mut self) -> Signal {
        Signal::ALL[self.inner.gen_range(0..Signal::COUNT)]
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
