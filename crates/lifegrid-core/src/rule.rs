//! The Conway birth/survival rule (B3/S23).

use crate::cell::CellState;

/// Compute a cell's next state from its current state and live-neighbour count.
///
/// - Live with 2 or 3 live neighbours survives.
/// - Dead with exactly 3 live neighbours is born.
/// - Every other cell is dead in the next generation.
pub fn next_state(state: CellState, live_neighbors: u8) -> CellState {
    match (state, live_neighbors) {
        (CellState::Live, 2 | 3) => CellState::Live,
        (CellState::Dead, 3) => CellState::Live,
        _ => CellState::Dead,
    }
}
