//! Interior dimensions and padded-field index arithmetic.

use lifegrid_core::Coord;

use crate::error::ArenaError;

/// Interior size of an arena plus the arithmetic for its padded field.
///
/// The field is stored row-major with a one-cell dead border on every
/// side, so it holds `(height + 2) * (length + 2)` cells and a row is
/// `length + 2` cells wide. Validated at construction; immutable after.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    length: usize,
    height: usize,
}

impl Dimensions {
    /// Smallest permitted interior length or height.
    pub const MIN: usize = 3;

    /// Largest permitted padded field, border included: 2^24 cells.
    pub const MAX_PADDED_CELLS: usize = 1 << 24;

    /// Validate and build dimensions for a `length` x `height` interior.
    ///
    /// Returns `Err(ArenaError::InvalidDimension)` if either side is
    /// below [`Self::MIN`], or `Err(ArenaError::DimensionTooLarge)` if
    /// the padded field would exceed [`Self::MAX_PADDED_CELLS`].
    pub fn new(length: usize, height: usize) -> Result<Self, ArenaError> {
        if length < Self::MIN || height < Self::MIN {
            return Err(ArenaError::InvalidDimension { length, height });
        }
        let padded = length
            .checked_add(2)
            .zip(height.checked_add(2))
            .and_then(|(l, h)| l.checked_mul(h));
        match padded {
            Some(cells) if cells <= Self::MAX_PADDED_CELLS => Ok(Self { length, height }),
            _ => Err(ArenaError::DimensionTooLarge { length, height }),
        }
    }

    /// Interior length (columns).
    pub fn length(&self) -> usize {
        self.length
    }

    /// Interior height (rows).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of active (interior) cells: `length * height`.
    pub fn area(&self) -> usize {
        self.length * self.height
    }

    /// Width of one padded row.
    pub fn stride(&self) -> usize {
        self.length + 2
    }

    /// Number of cells in the padded field, border included.
    pub fn padded_len(&self) -> usize {
        self.stride() * (self.height + 2)
    }

    /// Flat index of `(row, col)` in the padded field.
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.stride() + col
    }

    /// Whether `(row, col)` lies on the dead border ring.
    pub fn is_border(&self, row: usize, col: usize) -> bool {
        row == 0 || col == 0 || row == self.height + 1 || col == self.length + 1
    }

    /// Interior coordinate of the `rank`-th active cell in row-major order.
    pub fn coord_of_rank(&self, rank: usize) -> Coord {
        (rank / self.length + 1, rank % self.length + 1)
    }

    /// Row-major rank of an interior coordinate, or `None` for border or
    /// out-of-range positions.
    pub fn rank_of(&self, coord: Coord) -> Option<usize> {
        let (row, col) = coord;
        if row == 0 || col == 0 || row > self.height || col > self.length {
            return None;
        }
        Some((row - 1) * self.length + (col - 1))
    }
}
