//! Defines the storage that backs the board.

use std::{
    borrow::Borrow,
    ops::{Index, IndexMut},
};

use crate::{
    board::{Coordinate, SquareDimensions},
    units::Direction,
};

/// A single cell in the grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Cell {
    /// No unit occupies this cell.
    Empty,
    /// A unit facing the given direction occupies this cell.
    Occupied(Direction),
}

impl Cell {
    /// Get the facing of the unit in this cell, if any.
    pub fn unit(self) -> Option<Direction> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(dir) => Some(dir),
        }
    }

    /// Returns true if no unit occupies this cell.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

/// Cells of the board, stored in creation order.
#[derive(Debug, Clone)]
pub(crate) struct Grid {
    /// Dimensions of this board.
    pub(crate) dim: SquareDimensions,
    /// Cells that make up this board, indexed by [`SquareDimensions::try_linearize`].
    pub(crate) cells: Box<[Cell]>,
}

impl Grid {
    pub(crate) fn new(dim: SquareDimensions) -> Self {
        let cells = (0..dim.total_size()).map(|_| Default::default()).collect();
        Self { dim, cells }
    }

    /// Get a reference to the cell at the given [`Coordinate`].
    pub(crate) fn get<B: Borrow<Coordinate>>(&self, coord: B) -> Option<&Cell> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(crate) fn get_mut<B: Borrow<Coordinate>>(&mut self, coord: B) -> Option<&mut Cell> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(move |i| self.cells.get_mut(i))
    }

    /// Iterate all cells with their coordinates, in creation order.
    pub(crate) fn iter(&self) -> impl '_ + Iterator<Item = (Coordinate, Cell)> {
        let dim = &self.dim;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (dim.un_linearize(i), *cell))
    }
}

impl<B: Borrow<Coordinate>> Index<B> for Grid {
    type Output = Cell;

    fn index(&self, coord: B) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl<B: Borrow<Coordinate>> IndexMut<B> for Grid {
    fn index_mut(&mut self, coord: B) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}
