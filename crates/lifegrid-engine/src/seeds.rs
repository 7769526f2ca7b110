//! Random seed generation.

use std::error::Error;
use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Why a seed could not be generated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeedError {
    /// A seed of length zero was requested.
    ZeroLength,
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLength => write!(f, "seed length must be at least 1"),
        }
    }
}

impl Error for SeedError {}

/// Produces random `0`/`1` seed strings.
///
/// Each character is `1` with probability one half. A generator built
/// with [`seeded`](Self::seeded) yields the same sequence of seeds on
/// every run.
#[derive(Clone, Debug)]
pub struct SeedGenerator {
    rng: ChaCha8Rng,
}

impl SeedGenerator {
    /// Generator keyed from the thread-local OS-seeded RNG.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }

    /// Deterministic generator.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// [`seeded`](Self::seeded) when `seed` is given, otherwise
    /// [`from_entropy`](Self::from_entropy).
    pub fn from_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }

    /// A seed of `len` characters.
    pub fn generate(&mut self, len: usize) -> Result<String, SeedError> {
        if len == 0 {
            return Err(SeedError::ZeroLength);
        }
        Ok((0..len)
            .map(|_| if self.rng.random_bool(0.5) { '1' } else { '0' })
            .collect())
    }
}
