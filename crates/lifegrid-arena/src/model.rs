//! The arena model: padded cell field, dimensions, seed, and generation count.

use lifegrid_core::{Cell, Coord, Generation};
use smallvec::SmallVec;

use crate::dims::Dimensions;
use crate::error::ArenaError;
use crate::seed::{encode_states, zero_seed};
use crate::traverse::{ActiveCells, InteriorCoords};

/// All 8 offsets: N, S, W, E, NW, NE, SW, SE.
pub(crate) const OFFSETS_8: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Complete simulation state of one arena.
///
/// The field is a flat row-major vector of `(height + 2) * (length + 2)`
/// cells. Its outer ring is a permanent dead border: constructors build it
/// dead and the engine only ever writes interior cells, so interior
/// neighbour lookups never need a bounds check.
///
/// Fields are private; a model can only be obtained from
/// [`ArenaModel::empty`] or [`ArenaModel::from_active_cells`], both of
/// which enforce the shape and border invariants. Seed length is checked
/// when the model is handed to a [`CellArena`](crate::CellArena).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaModel {
    dims: Dimensions,
    field: Vec<Cell>,
    seed: String,
    iteration_count: u64,
}

impl ArenaModel {
    /// An all-dead `length` x `height` model with a zero-filled seed.
    pub fn empty(length: usize, height: usize) -> Result<Self, ArenaError> {
        let dims = Dimensions::new(length, height)?;
        Ok(Self {
            dims,
            field: dead_field(dims),
            seed: zero_seed(dims.area()),
            iteration_count: 0,
        })
    }

    /// Rebuild a model from its active cells, as read back from a save.
    ///
    /// `cells` must yield exactly `length * height` cells in row-major
    /// order, each carrying the coordinates of the slot it fills. States
    /// and neighbour counts are taken as given; the border is allocated
    /// fresh and dead. The seed is stored verbatim and validated later
    /// by [`CellArena::assign_model`](crate::CellArena::assign_model).
    ///
    /// An `iteration_count` of `u64::MAX` is rejected, since the next
    /// update could not advance it.
    pub fn from_active_cells<I>(
        length: usize,
        height: usize,
        iteration_count: u64,
        seed: String,
        cells: I,
    ) -> Result<Self, ArenaError>
    where
        I: IntoIterator<Item = Cell>,
    {
        let dims = Dimensions::new(length, height)?;
        if iteration_count == u64::MAX {
            return Err(ArenaError::IterationCountOverflow {
                count: iteration_count,
            });
        }
        let mut field = dead_field(dims);
        let mut cells = cells.into_iter();
        let mut found = 0usize;

        for (row, col) in InteriorCoords::new(dims) {
            let Some(cell) = cells.next() else {
                return Err(ArenaError::ActiveCellCountMismatch {
                    expected: dims.area(),
                    found,
                });
            };
            if cell.coord() != (row, col) {
                return Err(ArenaError::MisplacedCell {
                    expected: (row, col),
                    found: cell.coord(),
                });
            }
            if cell.live_neighbors > 8 {
                return Err(ArenaError::NeighborCountOutOfRange {
                    coord: cell.coord(),
                    count: cell.live_neighbors,
                });
            }
            field[dims.index(row, col)] = cell;
            found += 1;
        }

        let extra = cells.count();
        if extra > 0 {
            return Err(ArenaError::ActiveCellCountMismatch {
                expected: dims.area(),
                found: found + extra,
            });
        }

        Ok(Self {
            dims,
            field,
            seed,
            iteration_count,
        })
    }

    /// Interior dimensions.
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Interior length (columns).
    pub fn length(&self) -> usize {
        self.dims.length()
    }

    /// Interior height (rows).
    pub fn height(&self) -> usize {
        self.dims.height()
    }

    /// The seed this model was last initialized with.
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Generations advanced so far.
    pub fn iteration_count(&self) -> u64 {
        self.iteration_count
    }

    /// [`Self::iteration_count`] as a [`Generation`].
    pub fn generation(&self) -> Generation {
        Generation(self.iteration_count)
    }

    /// The whole padded field, border included, row-major.
    pub fn field(&self) -> &[Cell] {
        &self.field
    }

    /// The cell at `(row, col)` of the padded field.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row > self.dims.height() + 1 || col > self.dims.length() + 1 {
            return None;
        }
        self.field.get(self.dims.index(row, col))
    }

    /// Row-major view of the interior cells.
    pub fn active_cells(&self) -> ActiveCells<'_> {
        ActiveCells::new(&self.field, self.dims)
    }

    /// Number of live interior cells.
    pub fn live_count(&self) -> usize {
        self.active_cells().filter(|c| c.is_live()).count()
    }

    /// Current interior states encoded in seed form.
    ///
    /// Equal to [`Self::seed`] right after seeding; diverges as
    /// generations advance.
    pub fn state_string(&self) -> String {
        encode_states(self.active_cells().map(|c| c.state))
    }

    /// The 8 positions surrounding an interior coordinate.
    ///
    /// Border positions are included: for an interior cell every
    /// neighbour is in the padded field. Returns an empty list for
    /// border or out-of-range coordinates.
    pub fn neighbours(&self, coord: Coord) -> SmallVec<[Coord; 8]> {
        if self.dims.rank_of(coord).is_none() {
            return SmallVec::new();
        }
        let (row, col) = coord;
        OFFSETS_8
            .iter()
            .map(|&(dr, dc)| (row.wrapping_add_signed(dr), col.wrapping_add_signed(dc)))
            .collect()
    }

    pub(crate) fn field_mut(&mut self) -> &mut [Cell] {
        &mut self.field
    }

    pub(crate) fn set_seed(&mut self, seed: String) {
        self.seed = seed;
    }

    /// Pins at `u64::MAX`; [`Self::from_active_cells`] refuses to load
    /// that value, so a loaded arena always advances at least once.
    pub(crate) fn bump_iteration(&mut self) {
        self.iteration_count = self.iteration_count.saturating_add(1);
    }

    /// Live cells among the [`neighbours`](Self::neighbours) of interior
    /// cell `(row, col)`.
    pub(crate) fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        let live = self
            .neighbours((row, col))
            .into_iter()
            .filter(|&(r, c)| self.field[self.dims.index(r, c)].is_live())
            .count();
        // At most 8 positions.
        live as u8
    }

    /// Recompute every interior cell's neighbour count from current states.
    pub(crate) fn recount_neighbors(&mut self) {
        for (row, col) in InteriorCoords::new(self.dims) {
            let live = self.count_live_neighbors(row, col);
            let idx = self.dims.index(row, col);
            self.field[idx].live_neighbors = live;
        }
    }
}

fn dead_field(dims: Dimensions) -> Vec<Cell> {
    let stride = dims.stride();
    (0..dims.padded_len())
        .map(|i| Cell::dead(i / stride, i % stride))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifegrid_core::CellState;

    fn active(model: &ArenaModel) -> Vec<Cell> {
        model.active_cells().copied().collect()
    }

    #[test]
    fn empty_model_shape() {
        let m = ArenaModel::empty(4, 3).unwrap();
        assert_eq!(m.field().len(), 6 * 5);
        assert_eq!(m.seed(), "000000000000");
        assert_eq!(m.iteration_count(), 0);
        assert_eq!(m.live_count(), 0);
        for (i, cell) in m.field().iter().enumerate() {
            assert_eq!(cell.coord(), (i / 6, i % 6));
            assert_eq!(cell.state, CellState::Dead);
        }
    }

    #[test]
    fn cell_lookup_covers_border() {
        let m = ArenaModel::empty(3, 3).unwrap();
        assert_eq!(m.cell(0, 0).map(Cell::coord), Some((0, 0)));
        assert_eq!(m.cell(4, 4).map(Cell::coord), Some((4, 4)));
        assert!(m.cell(5, 0).is_none());
        assert!(m.cell(0, 5).is_none());
    }

    #[test]
    fn neighbours_of_corner_include_border() {
        let m = ArenaModel::empty(3, 3).unwrap();
        let n = m.neighbours((1, 1));
        assert_eq!(n.len(), 8);
        assert!(n.contains(&(0, 0)));
        assert!(n.contains(&(2, 2)));
        assert!(!n.contains(&(1, 1)));
        assert!(m.neighbours((0, 1)).is_empty());
    }

    #[test]
    fn from_active_cells_round_trips() {
        let mut m = ArenaModel::empty(3, 4).unwrap();
        let idx = m.dims().index(2, 2);
        m.field_mut()[idx].state = CellState::Live;
        m.recount_neighbors();

        let rebuilt = ArenaModel::from_active_cells(
            3,
            4,
            m.iteration_count(),
            m.seed().to_string(),
            active(&m),
        )
        .unwrap();
        assert_eq!(rebuilt, m);
    }

    #[test]
    fn from_active_cells_rejects_short_input() {
        let m = ArenaModel::empty(3, 3).unwrap();
        let cells: Vec<Cell> = active(&m).into_iter().take(8).collect();
        assert_eq!(
            ArenaModel::from_active_cells(3, 3, 0, zero_seed(9), cells),
            Err(ArenaError::ActiveCellCountMismatch {
                expected: 9,
                found: 8
            })
        );
    }

    #[test]
    fn from_active_cells_rejects_long_input() {
        let m = ArenaModel::empty(3, 3).unwrap();
        let mut cells = active(&m);
        cells.push(Cell::dead(1, 1));
        cells.push(Cell::dead(1, 2));
        assert_eq!(
            ArenaModel::from_active_cells(3, 3, 0, zero_seed(9), cells),
            Err(ArenaError::ActiveCellCountMismatch {
                expected: 9,
                found: 11
            })
        );
    }

    #[test]
    fn from_active_cells_rejects_out_of_order() {
        let m = ArenaModel::empty(3, 3).unwrap();
        let mut cells = active(&m);
        cells.swap(0, 1);
        assert_eq!(
            ArenaModel::from_active_cells(3, 3, 0, zero_seed(9), cells),
            Err(ArenaError::MisplacedCell {
                expected: (1, 1),
                found: (1, 2)
            })
        );
    }

    #[test]
    fn from_active_cells_rejects_impossible_count() {
        let m = ArenaModel::empty(3, 3).unwrap();
        let mut cells = active(&m);
        cells[4].live_neighbors = 9;
        assert_eq!(
            ArenaModel::from_active_cells(3, 3, 0, zero_seed(9), cells),
            Err(ArenaError::NeighborCountOutOfRange {
                coord: (2, 2),
                count: 9
            })
        );
    }

    #[test]
    fn counts_come_from_neighbour_list() {
        let mut m = ArenaModel::empty(3, 3).unwrap();
        for (row, col) in InteriorCoords::new(m.dims()) {
            let idx = m.dims().index(row, col);
            m.field_mut()[idx].state = CellState::Live;
        }
        assert_eq!(m.count_live_neighbors(2, 2), 8);
        assert_eq!(m.count_live_neighbors(1, 1), 3);
        assert_eq!(m.count_live_neighbors(1, 2), 5);
    }

    #[test]
    fn from_active_cells_rejects_exhausted_generation_count() {
        let m = ArenaModel::empty(3, 3).unwrap();
        assert_eq!(
            ArenaModel::from_active_cells(3, 3, u64::MAX, zero_seed(9), active(&m)),
            Err(ArenaError::IterationCountOverflow { count: u64::MAX })
        );
        let last = ArenaModel::from_active_cells(3, 3, u64::MAX - 1, zero_seed(9), active(&m));
        assert_eq!(last.unwrap().iteration_count(), u64::MAX - 1);
    }

    #[test]
    fn from_active_cells_rejects_huge_dimensions_before_allocating() {
        assert!(matches!(
            ArenaModel::from_active_cells(1_000_000_000, 1_000_000_000, 0, String::new(), Vec::new()),
            Err(ArenaError::DimensionTooLarge { .. })
        ));
    }

    #[test]
    fn from_active_cells_validates_dimensions() {
        assert!(matches!(
            ArenaModel::from_active_cells(2, 3, 0, String::new(), Vec::new()),
            Err(ArenaError::InvalidDimension { .. })
        ));
    }
}
