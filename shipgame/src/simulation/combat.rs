//! Shooting at cells.
use std::{fmt, mem};

use crate::{
    board::{Board, CannotShootReason, Cell, Coordinate, ShotError},
    units::Direction,
};

/// A unit destroyed by a shot, with the facing it had when it was hit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SunkRecord {
    /// Cell the unit occupied.
    pub coord: Coordinate,
    /// Facing of the unit when it was sunk.
    pub facing: Direction,
}

impl fmt::Display for SunkRecord {
    /// Writes the record in the report format, `(x, y, D) SUNK`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}) SUNK", self.coord, self.facing)
    }
}

/// Result of a shot that did not fail.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The target cell was empty. Nothing changed.
    Miss,
    /// The unit in the target cell was destroyed and the cell emptied.
    Sunk(SunkRecord),
}

impl ShotOutcome {
    /// Get the record of the sunk unit, if the shot hit one.
    pub fn sunk(&self) -> Option<&SunkRecord> {
        match self {
            ShotOutcome::Miss => None,
            ShotOutcome::Sunk(record) => Some(record),
        }
    }
}

impl Board {
    /// Fire at `target`. A unit there is removed from the board and returned as a
    /// [`SunkRecord`]. Shooting an empty cell does nothing.
    pub fn shoot(&mut self, target: Coordinate) -> Result<ShotOutcome, ShotError> {
        let cell = self
            .grid
            .get_mut(target)
            .ok_or_else(|| ShotError::new(CannotShootReason::OutOfBounds, target))?;
        Ok(match mem::take(cell) {
            Cell::Empty => ShotOutcome::Miss,
            Cell::Occupied(facing) => ShotOutcome::Sunk(SunkRecord {
                coord: target,
                facing,
            }),
        })
    }
}
