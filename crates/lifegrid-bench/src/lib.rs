//! Benchmark profiles for the lifegrid arena engine.
//!
//! - [`reference_arena`]: 100x100 interior (10K cells), random seed
//! - [`stress_arena`]: 316x316 interior (~100K cells), random seed
//!
//! Seeds come from a [`SeedGenerator`] keyed by the caller, so every
//! benchmark run starts from the same arena.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use lifegrid_arena::{ArenaError, CellArena};
use lifegrid_engine::{GameError, SeedGenerator};

/// A `length` x `height` arena seeded from `key`.
pub fn random_arena(length: usize, height: usize, key: u64) -> Result<CellArena, GameError> {
    let mut arena = CellArena::new(length, height)?;
    let seed = SeedGenerator::seeded(key).generate(length * height)?;
    arena.initialize_with_seed(&seed)?;
    Ok(arena)
}

/// 100x100 reference arena.
pub fn reference_arena(key: u64) -> Result<CellArena, GameError> {
    random_arena(100, 100, key)
}

/// 316x316 stress arena.
pub fn stress_arena(key: u64) -> Result<CellArena, GameError> {
    random_arena(316, 316, key)
}

/// Seed of `len` alternating cells, for benchmarks that need no RNG.
pub fn checkerboard_seed(len: usize) -> String {
    (0..len).map(|i| if i % 2 == 0 { '1' } else { '0' }).collect()
}

/// Empty arena of the reference size.
pub fn empty_reference_arena() -> Result<CellArena, ArenaError> {
    CellArena::new(100, 100)
}
