//! Deterministic random number generation, one stream per game.
//!
//! A match and the bots playing in it are often built from the same seed.
//! Bots derive a named stream with [`GameRng::for_context`] so their choices
//! never correlate with the deal.
//!
//! ```
//! use rust_favors::core::GameRng;
//!
//! let mut bot_rng = GameRng::new(42).for_context("bot");
//! let mut bot_rng2 = GameRng::new(42).for_context("bot");
//! assert_eq!(bot_rng.gen_range_usize(0..100), bot_rng2.gen_range_usize(0..100));
//! ```

use std::hash::{Hash, Hasher};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;

/// Deterministic RNG owned by a single game or player.
///
/// ChaCha8 keeps the sequence stable for a seed across platforms.
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

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// An independent stream for a named purpose.
    ///
    /// Depends only on this stream's seed and `context`, not on how much of
    /// this stream was consumed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        // FxHasher output is fixed, unlike DefaultHasher's.
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// `true` with the given probability.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
