//! Deterministic random number generation for the shuffle.
//!
//! The shuffle is the only source of non-determinism in a match. Routing it
//! through `GameRng` keeps it injectable: the same seed always deals the same
//! stack, so whole matches replay byte-for-byte.
//!
//! ```
//! use rust_dominoes::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut left = vec![1, 2, 3, 4, 5];
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//! assert_eq!(left, right);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from an entropy-drawn seed.
    ///
    /// The seed is still recorded so the match can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in `0..=max`.
    pub fn gen_index(&mut self, max: usize) -> usize {
        self.inner.gen_range(0..=max)
    }

    /// Shuffle a slice in place with Fisher-Yates.
    ///
    /// Walks from the last index down to 1, swapping each element with a
    /// uniformly chosen element at or below it, so every permutation is
    /// equally likely.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.gen_index(i);
            slice.swap(i, j);
        }
    }
}
