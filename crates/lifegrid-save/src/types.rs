//! Save document layout.
//!
//! ```text
//! {
//!   "FieldLength": 3, "FieldHeight": 3, "IterationCount": 1,
//!   "Seed": "010100011",
//!   "ActiveCells": [
//!     { "Col": 1, "Row": 1, "State": 1, "LiveNeighborCellCount": 1 },
//!     ...
//!   ]
//! }
//! ```
//!
//! `ActiveCells` lists the interior in row-major order. `State` is `0`
//! for dead and `1` for live.

use lifegrid_core::{Cell, CellState};
use serde::{Deserialize, Serialize};

/// Serialized form of an arena.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SaveDocument {
    /// Interior length.
    pub field_length: usize,
    /// Interior height.
    pub field_height: usize,
    /// Generations advanced when the save was taken.
    pub iteration_count: u64,
    /// Seed the arena was initialized with.
    pub seed: String,
    /// Interior cells, row-major.
    pub active_cells: Vec<CellRecord>,
}

/// Serialized form of one active cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CellRecord {
    /// Column within the padded field.
    pub col: usize,
    /// Row within the padded field.
    pub row: usize,
    /// Life state, encoded as `0`/`1`.
    #[serde(with = "state_code")]
    pub state: CellState,
    /// Live-neighbour count at save time.
    pub live_neighbor_cell_count: u8,
}

impl From<&Cell> for CellRecord {
    fn from(cell: &Cell) -> Self {
        Self {
            col: cell.col,
            row: cell.row,
            state: cell.state,
            live_neighbor_cell_count: cell.live_neighbors,
        }
    }
}

impl From<CellRecord> for Cell {
    fn from(record: CellRecord) -> Self {
        Self {
            row: record.row,
            col: record.col,
            state: record.state,
            live_neighbors: record.live_neighbor_cell_count,
        }
    }
}

mod state_code {
    use lifegrid_core::CellState;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(state: &CellState, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u8(match state {
            CellState::Dead => 0,
            CellState::Live => 1,
        })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<CellState, D::Error> {
        match u8::deserialize(d)? {
            0 => Ok(CellState::Dead),
            1 => Ok(CellState::Live),
            other => Err(D::Error::custom(format!(
                "cell state must be 0 or 1, got {other}"
            ))),
        }
    }
}
