// src/core/random.rs

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of randomness for relation generation.
///
/// Wraps a ChaCha8 stream so a session can either draw a fresh seed from OS
/// entropy or replay a fixed seed (the config `seed` option and the tests).
pub struct GameRandom {
    rng: ChaCha8Rng,
}

impl GameRandom {
    pub fn new() -> Self {
        let mut seed = [0u8; 32];
        rand::rng().fill(&mut seed);
        GameRandom {
            rng: ChaCha8Rng::from_seed(seed),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        GameRandom {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Uniform draw in [0, 1).
    pub fn next_double(&mut self) -> f64 {
        self.rng.random()
    }
}

impl Default for GameRandom {
    fn default() -> Self {
        Self::new()
    }
}
