//! Cell state and the per-cell record held by the arena field.

use std::fmt;

use crate::id::Coord;

/// Life state of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    /// The cell is empty. Border cells are always `Dead`.
    #[default]
    Dead,
    /// The cell is alive.
    Live,
}

impl CellState {
    /// Returns `true` for [`CellState::Live`].
    pub fn is_live(self) -> bool {
        matches!(self, Self::Live)
    }

    /// Decode a seed character: `'0'` is dead, `'1'` is live.
    ///
    /// Any other character yields `None`.
    pub fn from_seed_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Self::Dead),
            '1' => Some(Self::Live),
            _ => None,
        }
    }

    /// Encode as a seed character.
    pub fn to_seed_char(self) -> char {
        match self {
            Self::Dead => '0',
            Self::Live => '1',
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dead => write!(f, "dead"),
            Self::Live => write!(f, "live"),
        }
    }
}

/// A single position in the padded arena field.
///
/// `live_neighbors` is only meaningful for the state snapshot that
/// produced it; the arena recomputes it after every mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Row index within the padded field.
    pub row: usize,
    /// Column index within the padded field.
    pub col: usize,
    /// Current life state.
    pub state: CellState,
    /// Number of live cells among the 8 surrounding positions (0..=8).
    pub live_neighbors: u8,
}

impl Cell {
    /// A cell at `(row, col)` with the given state and no live neighbours.
    pub fn new(row: usize, col: usize, state: CellState) -> Self {
        Self {
            row,
            col,
            state,
            live_neighbors: 0,
        }
    }

    /// A dead cell at `(row, col)`.
    pub fn dead(row: usize, col: usize) -> Self {
        Self::new(row, col, CellState::Dead)
    }

    /// The `(row, col)` identity of this cell.
    pub fn coord(&self) -> Coord {
        (self.row, self.col)
    }

    /// Shorthand for `self.state.is_live()`.
    pub fn is_live(&self) -> bool {
        self.state.is_live()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_chars_decode() {
        assert_eq!(CellState::from_seed_char('0'), Some(CellState::Dead));
        assert_eq!(CellState::from_seed_char('1'), Some(CellState::Live));
        assert_eq!(CellState::from_seed_char('2'), None);
        assert_eq!(CellState::from_seed_char(' '), None);
    }

    #[test]
    fn seed_char_encode_inverts_decode() {
        for state in [CellState::Dead, CellState::Live] {
            assert_eq!(CellState::from_seed_char(state.to_seed_char()), Some(state));
        }
    }

    #[test]
    fn new_cell_has_zero_neighbors() {
        let cell = Cell::new(2, 3, CellState::Live);
        assert_eq!(cell.coord(), (2, 3));
        assert_eq!(cell.live_neighbors, 0);
        assert!(cell.is_live());
        assert!(!Cell::dead(0, 0).is_live());
    }
}
