//! Standard patterns for arena tests.
//!
//! Seeds are row-major `0`/`1` strings:
//!
//! - [`BLOCK_SEED`] is a still life on 4x4.
//! - [`BLINKER_SEED`] is a horizontal period-2 oscillator on 3x3.
//! - [`GLIDER_SEED`] is a glider heading down-right on 6x6.

use lifegrid_arena::CellArena;

/// 2x2 block centred in a 4x4 arena.
pub const BLOCK_SEED: &str = "0000011001100000";

/// Horizontal blinker across the middle row of a 3x3 arena.
pub const BLINKER_SEED: &str = "000111000";

/// Glider in the top-left corner of a 6x6 arena.
pub const GLIDER_SEED: &str = concat!(
    "010000", "001000", "111000", "000000", "000000", "000000"
);

/// A `length` x `height` arena initialized with `seed`.
///
/// # Panics
///
/// Panics if the dimensions or seed are rejected.
pub fn seeded_arena(length: usize, height: usize, seed: &str) -> CellArena {
    let mut arena = CellArena::new(length, height).expect("fixture dimensions");
    arena.initialize_with_seed(seed).expect("fixture seed");
    arena
}
