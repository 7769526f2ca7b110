//! Row-major traversal of the interior.
//!
//! Seed mapping, neighbour recounting, the [`ActiveCells`] view, save
//! conversion and rendering all walk the interior in one fixed order:
//! row 1 to `height`, and within a row column 1 to `length`. Every one
//! of them goes through [`InteriorCoords`] so the order cannot drift.

use std::iter::FusedIterator;

use lifegrid_core::{Cell, Coord};

use crate::dims::Dimensions;

/// Iterator over interior `(row, col)` coordinates in row-major order.
#[derive(Clone, Debug)]
pub struct InteriorCoords {
    dims: Dimensions,
    next: usize,
}

impl InteriorCoords {
    /// Start a fresh traversal of `dims`.
    pub fn new(dims: Dimensions) -> Self {
        Self { dims, next: 0 }
    }
}

impl Iterator for InteriorCoords {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.next >= self.dims.area() {
            return None;
        }
        let coord = self.dims.coord_of_rank(self.next);
        self.next += 1;
        Some(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.dims.area() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for InteriorCoords {}
impl FusedIterator for InteriorCoords {}

/// Read-only row-major view of the active (non-border) cells.
///
/// Obtained from [`CellArena::active_cells`](crate::CellArena::active_cells)
/// or [`ArenaModel::active_cells`](crate::ArenaModel::active_cells). Each
/// call starts a new traversal; cloning an in-progress view resumes from
/// the same position.
#[derive(Clone, Debug)]
pub struct ActiveCells<'a> {
    field: &'a [Cell],
    dims: Dimensions,
    coords: InteriorCoords,
}

impl<'a> ActiveCells<'a> {
    pub(crate) fn new(field: &'a [Cell], dims: Dimensions) -> Self {
        Self {
            field,
            dims,
            coords: InteriorCoords::new(dims),
        }
    }
}

impl<'a> Iterator for ActiveCells<'a> {
    type Item = &'a Cell;

    fn next(&mut self) -> Option<&'a Cell> {
        let (row, col) = self.coords.next()?;
        self.field.get(self.dims.index(row, col))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.coords.size_hint()
    }
}

impl ExactSizeIterator for ActiveCells<'_> {}
impl FusedIterator for ActiveCells<'_> {}
