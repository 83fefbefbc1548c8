//! Non-repeating random selection over the fallback pool.
//!
//! Tracks which pool positions have been shown since the last reset so a
//! quote never repeats within a full cycle through the pool. Once a draw
//! completes the cycle the set is cleared and the next cycle starts fresh.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::quotes::{FallbackPool, Quote};

/// Picks fallback quotes with no repeats until the pool is exhausted.
///
/// The pool must be non-empty; callers validate that at startup.
#[derive(Debug)]
pub struct FallbackSelector {
    pool: FallbackPool,
    used: HashSet<usize>,
    rng: StdRng,
}

impl FallbackSelector {
    pub fn new(pool: FallbackPool) -> Self {
        Self::with_rng(pool, StdRng::from_os_rng())
    }

    /// Construct with an explicit RNG. Tests pass a seeded `StdRng` to make
    /// the draw order deterministic.
    pub fn with_rng(pool: FallbackPool, rng: StdRng) -> Self {
        Self {
            pool,
            used: HashSet::new(),
            rng,
        }
    }

    /// Return a fallback quote not yet shown in the current cycle.
    ///
    /// Draws uniformly random indices, rejecting used ones, until a free
    /// index is found. A completed cycle clears the used set, so a pool of
    /// size 1 simply reuses its single entry every call.
    pub fn next_fallback(&mut self) -> Quote {
        let len = self.pool.len();
        let mut index = self.rng.random_range(0..len);
        while self.used.contains(&index) {
            index = self.rng.random_range(0..len);
        }
        self.used.insert(index);
        if self.used.len() == len {
            self.used.clear();
        }
        self.pool.quote_at(index).clone()
    }

    /// Number of positions shown since the last reset.
    pub fn used_len(&self) -> usize {
        self.used.len()
    }

    pub fn pool(&self) -> &FallbackPool {
        &self.pool
    }
}
