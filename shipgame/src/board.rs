//! Types that make up the game board.

use tracing::warn;

use crate::units::Direction;

pub(crate) use self::grid::Grid;
pub use self::{
    coordinate::Coordinate,
    dimensions::SquareDimensions,
    errors::{BoundsError, CannotMoveReason, CannotShootReason, MoveError, ShotError},
    grid::Cell,
};

mod coordinate;
mod dimensions;
mod errors;
mod grid;

/// Initial position and facing of a unit, as written in the input.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Placement {
    /// Cell the unit starts in.
    pub coord: Coordinate,
    /// The direction letter given for the unit. Letters other than `N`, `E`, `S`, `W`
    /// are kept here and dropped at placement time.
    pub facing: char,
}

impl Placement {
    /// Construct a placement from a coordinate and a direction letter.
    pub fn new(coord: Coordinate, facing: char) -> Self {
        Self { coord, facing }
    }

    /// The direction of this placement, if the letter names one.
    pub fn direction(&self) -> Option<Direction> {
        Direction::from_letter(self.facing)
    }
}

impl From<(Coordinate, Direction)> for Placement {
    fn from((coord, dir): (Coordinate, Direction)) -> Self {
        Self::new(coord, dir.letter())
    }
}

/// A square board where each cell is either empty or holds one unit.
#[derive(Debug, Clone)]
pub struct Board {
    /// Grid of cells occupied by units.
    pub(crate) grid: Grid,
}

impl Board {
    /// Create a board of `size` x `size` empty cells. Fails if `size` is 0.
    pub fn new(size: usize) -> Result<Self, BoundsError> {
        SquareDimensions::try_new(size).map(Self::with_dimensions)
    }

    fn with_dimensions(dim: SquareDimensions) -> Self {
        Self {
            grid: Grid::new(dim),
        }
    }

    /// Number of cells along each axis.
    pub fn size(&self) -> usize {
        self.grid.dim.size()
    }

    /// Get the cell at the given coordinate. Returns `None` if the coordinate is out of
    /// bounds.
    pub fn get(&self, coord: Coordinate) -> Option<Cell> {
        self.grid.get(coord).copied()
    }

    /// Iterate all cells in creation order.
    pub fn cells(&self) -> impl '_ + Iterator<Item = (Coordinate, Cell)> {
        self.grid.iter()
    }

    /// Iterate all units on the board in creation order.
    pub fn units(&self) -> impl '_ + Iterator<Item = (Coordinate, Direction)> {
        self.cells()
            .filter_map(|(coord, cell)| cell.unit().map(|dir| (coord, dir)))
    }

    /// Put units on the board. The first placement on a cell wins. Placements on an
    /// occupied cell, with an unknown direction letter, or outside the board are
    /// dropped. Returns the number of units placed.
    pub fn place<'a, I>(&mut self, placements: I) -> usize
    where
        I: IntoIterator<Item = &'a Placement>,
    {
        let mut placed = 0;
        for placement in placements {
            let dir = match placement.direction() {
                Some(dir) => dir,
                None => {
                    warn!(
                        coord = %placement.coord,
                        facing = ?placement.facing,
                        "dropping placement with unknown direction"
                    );
                    continue;
                }
            };
            match self.grid.get_mut(placement.coord) {
                None => warn!(
                    coord = %placement.coord,
                    "dropping placement outside the board"
                ),
                Some(cell) if !cell.is_empty() => warn!(
                    coord = %placement.coord,
                    "dropping placement on an occupied cell"
                ),
                Some(cell) => {
                    *cell = Cell::Occupied(dir);
                    placed += 1;
                }
            }
        }
        placed
    }
}
