//! The generation engine.
//!
//! [`CellArena`] owns one [`ArenaModel`] exclusively. Every mutating
//! method takes `&mut self`, and [`CellArena::active_cells`] borrows
//! `self`, so the borrow checker rules out mutating the field while a
//! traversal is in progress.
//!
//! # Update
//!
//! [`CellArena::update`] runs in two phases. The transition phase
//! decides every interior cell's next state from the neighbour counts
//! captured for the previous generation; those counts are not touched
//! while states change, so the result is as if all cells switched
//! simultaneously. The recount phase then rebuilds every count from the
//! new states.

use lifegrid_core::{next_state, Generation};
use tracing::{debug, trace};

use crate::error::ArenaError;
use crate::model::ArenaModel;
use crate::seed::parse_seed;
use crate::traverse::{ActiveCells, InteriorCoords};

/// A Game of Life arena: padded field plus the engine that advances it.
///
/// # Example
///
/// ```
/// use lifegrid_arena::CellArena;
///
/// let mut arena = CellArena::new(3, 3).unwrap();
/// arena.initialize_with_seed("000111000").unwrap();
/// arena.update();
/// assert_eq!(arena.model().state_string(), "010010010");
/// assert_eq!(arena.model().iteration_count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellArena {
    model: ArenaModel,
}

impl CellArena {
    /// Create an empty (all dead) `length` x `height` arena.
    ///
    /// # Errors
    ///
    /// [`ArenaError::InvalidDimension`] if either side is below 3.
    pub fn new(length: usize, height: usize) -> Result<Self, ArenaError> {
        let model = ArenaModel::empty(length, height)?;
        debug!(length, height, "created empty arena");
        Ok(Self { model })
    }

    /// Wrap an existing model, applying the same check as [`Self::assign_model`].
    pub fn from_model(model: ArenaModel) -> Result<Self, ArenaError> {
        check_seed_size(&model)?;
        Ok(Self { model })
    }

    /// Replace the current model with an empty `length` x `height` one.
    ///
    /// On error the current model is kept.
    pub fn create_empty(&mut self, length: usize, height: usize) -> Result<(), ArenaError> {
        let model = ArenaModel::empty(length, height)?;
        self.model = model;
        debug!(length, height, "reset to empty arena");
        Ok(())
    }

    /// Replace the whole backing model.
    ///
    /// Neighbour counts are taken from `model` as-is; call
    /// [`Self::recount_neighbors`] if they may be stale.
    ///
    /// # Errors
    ///
    /// [`ArenaError::SeedSizeMismatch`] if the model's seed length is not
    /// `length * height`. The current model is kept.
    pub fn assign_model(&mut self, model: ArenaModel) -> Result<(), ArenaError> {
        check_seed_size(&model)?;
        debug!(
            length = model.length(),
            height = model.height(),
            iteration = model.iteration_count(),
            "assigned arena model"
        );
        self.model = model;
        Ok(())
    }

    /// Set every interior cell from `seed` and compute neighbour counts.
    ///
    /// Character `i` of the seed sets the `i`-th active cell in row-major
    /// order. The seed is stored verbatim. The border is untouched and the
    /// iteration count is unchanged.
    ///
    /// # Errors
    ///
    /// [`ArenaError::SeedLengthMismatch`] if the seed length differs from
    /// the arena's, otherwise [`ArenaError::InvalidSeedCharacter`] for a
    /// character other than `'0'`/`'1'`. Validation completes before any
    /// cell is written.
    pub fn initialize_with_seed(&mut self, seed: &str) -> Result<(), ArenaError> {
        let dims = self.model.dims();
        let states = parse_seed(seed, self.model.seed().chars().count())?;

        let field = self.model.field_mut();
        for ((row, col), state) in InteriorCoords::new(dims).zip(states) {
            field[dims.index(row, col)].state = state;
        }
        self.model.set_seed(seed.to_string());
        self.model.recount_neighbors();

        debug!(
            length = dims.length(),
            height = dims.height(),
            live = self.model.live_count(),
            "initialized arena from seed"
        );
        Ok(())
    }

    /// Advance one generation.
    pub fn update(&mut self) {
        self.model.bump_iteration();

        let dims = self.model.dims();
        let field = self.model.field_mut();
        for (row, col) in InteriorCoords::new(dims) {
            let cell = &mut field[dims.index(row, col)];
            cell.state = next_state(cell.state, cell.live_neighbors);
        }

        self.model.recount_neighbors();
        trace!(
            generation = self.model.iteration_count(),
            live = self.model.live_count(),
            "advanced generation"
        );
    }

    /// Rebuild every interior neighbour count from the current states.
    pub fn recount_neighbors(&mut self) {
        self.model.recount_neighbors();
    }

    /// Row-major view of the interior cells. Each call starts afresh.
    pub fn active_cells(&self) -> ActiveCells<'_> {
        self.model.active_cells()
    }

    /// The current model.
    pub fn model(&self) -> &ArenaModel {
        &self.model
    }

    /// Consume the arena, returning its model.
    pub fn into_model(self) -> ArenaModel {
        self.model
    }

    /// Generations advanced so far.
    pub fn generation(&self) -> Generation {
        self.model.generation()
    }

    /// Number of live interior cells.
    pub fn live_count(&self) -> usize {
        self.model.live_count()
    }
}

fn check_seed_size(model: &ArenaModel) -> Result<(), ArenaError> {
    let seed_len = model.seed().chars().count();
    let expected = model.dims().area();
    if seed_len != expected {
        return Err(ArenaError::SeedSizeMismatch { seed_len, expected });
    }
    Ok(())
}
