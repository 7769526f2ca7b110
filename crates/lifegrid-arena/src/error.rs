//! Arena-specific error types.

use std::error::Error;
use std::fmt;

use lifegrid_core::Coord;

/// Validation failures raised by arena construction, assignment, and seeding.
///
/// Every variant is reported before any state is mutated; the arena that
/// returned the error is exactly as it was before the call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// Length or height is below [`Dimensions::MIN`](crate::Dimensions::MIN).
    InvalidDimension {
        /// Requested interior length.
        length: usize,
        /// Requested interior height.
        height: usize,
    },
    /// The padded field would exceed
    /// [`Dimensions::MAX_PADDED_CELLS`](crate::Dimensions::MAX_PADDED_CELLS).
    DimensionTooLarge {
        /// Requested interior length.
        length: usize,
        /// Requested interior height.
        height: usize,
    },
    /// A whole model was assigned whose seed length disagrees with its area.
    SeedSizeMismatch {
        /// Number of characters in the model's seed.
        seed_len: usize,
        /// `length * height` of the model.
        expected: usize,
    },
    /// A seed supplied for initialization has the wrong length.
    SeedLengthMismatch {
        /// Number of characters in the supplied seed.
        seed_len: usize,
        /// Seed length held by the arena.
        expected: usize,
    },
    /// A seed contains something other than `'0'` or `'1'`.
    InvalidSeedCharacter {
        /// Character position within the seed.
        index: usize,
        /// The offending character.
        found: char,
    },
    /// A model rebuilt from active cells got the wrong number of cells.
    ActiveCellCountMismatch {
        /// `length * height`.
        expected: usize,
        /// Number of cells supplied.
        found: usize,
    },
    /// A rebuilt cell's coordinates disagree with its row-major slot.
    MisplacedCell {
        /// Slot the cell landed in.
        expected: Coord,
        /// Coordinates the cell carried.
        found: Coord,
    },
    /// A rebuilt cell claims more than eight live neighbours.
    NeighborCountOutOfRange {
        /// Position of the cell.
        coord: Coord,
        /// The impossible count.
        count: u8,
    },
    /// A rebuilt model's generation count leaves no room to advance.
    IterationCountOverflow {
        /// The saved count.
        count: u64,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { length, height } => write!(
                f,
                "arena dimensions {length} x {height} invalid: length and height must be at least {}",
                crate::Dimensions::MIN
            ),
            Self::DimensionTooLarge { length, height } => write!(
                f,
                "arena dimensions {length} x {height} are too large: the bordered field may hold at most {} cells",
                crate::Dimensions::MAX_PADDED_CELLS
            ),
            Self::SeedSizeMismatch { seed_len, expected } => write!(
                f,
                "model seed has {seed_len} characters, arena area is {expected}"
            ),
            Self::SeedLengthMismatch { seed_len, expected } => write!(
                f,
                "seed has {seed_len} characters, expected {expected}"
            ),
            Self::InvalidSeedCharacter { index, found } => write!(
                f,
                "seed character {found:?} at position {index} is not '0' or '1'"
            ),
            Self::ActiveCellCountMismatch { expected, found } => {
                write!(f, "expected {expected} active cells, found {found}")
            }
            Self::MisplacedCell { expected, found } => write!(
                f,
                "cell at {found:?} is out of order: slot is {expected:?}"
            ),
            Self::NeighborCountOutOfRange { coord, count } => {
                write!(f, "cell {coord:?} has {count} live neighbours (max 8)")
            }
            Self::IterationCountOverflow { count } => {
                write!(f, "generation count {count} cannot be advanced")
            }
        }
    }
}

impl Error for ArenaError {}
