//! Errors used by the `Board` and the engines that mutate it.

use thiserror::Error;

use crate::board::Coordinate;

/// Error returned when a board cannot be created with the requested size.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum BoundsError {
    /// A board needs at least one cell along each axis.
    #[error("board size must be a positive integer, got 0")]
    ZeroSize,
    /// The number of cells would not fit in memory addressing.
    #[error("board size {0} is too large")]
    TooLarge(usize),
}

/// Reason why a move command could not be applied.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotMoveReason {
    /// The move did not contain any operations.
    #[error("no move operations given")]
    NoOperations,
    /// The move contained a character other than `M`, `L`, or `R`.
    #[error("invalid move operation {0:?}, must be one of 'M', 'L', 'R'")]
    InvalidOperation(char),
    /// There is no unit in the origin cell.
    #[error("there is no unit to move")]
    NoUnit,
    /// The origin cell is not on the board.
    #[error("the origin is out of bounds")]
    OriginOutOfBounds,
    /// The cell the unit would end on is not on the board.
    #[error("the destination ({0}, {1}) is out of bounds")]
    DestinationOutOfBounds(isize, isize),
}

/// Error caused when attempting to move a unit.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not move unit at ({origin}): {reason}")]
pub struct MoveError {
    reason: CannotMoveReason,
    origin: Coordinate,
}

impl MoveError {
    /// Construct a move error from a reason and the origin of the move.
    pub(crate) fn new(reason: CannotMoveReason, origin: Coordinate) -> Self {
        Self { reason, origin }
    }

    /// Get the reason the move was aborted.
    pub fn reason(&self) -> CannotMoveReason {
        self.reason
    }

    /// Get the origin cell of the move.
    pub fn origin(&self) -> &Coordinate {
        &self.origin
    }
}

/// Reason why a particular cell could not be shot.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotShootReason {
    /// The cell selected was out of bounds on the board.
    #[error("the target is out of bounds")]
    OutOfBounds,
}

/// Error returned when trying to shoot a cell.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not shoot cell ({target}): {reason}")]
pub struct ShotError {
    /// Reason why the cell could not be shot.
    reason: CannotShootReason,

    /// The coordinates of the cell.
    target: Coordinate,
}

impl ShotError {
    /// Construct a shot error with the given reason for the specified cell.
    pub(crate) fn new(reason: CannotShootReason, target: Coordinate) -> Self {
        Self { reason, target }
    }

    /// Get the reason the shot failed.
    pub fn reason(&self) -> CannotShootReason {
        self.reason
    }

    /// Get the coordinate of the shot cell.
    pub fn target(&self) -> &Coordinate {
        &self.target
    }
}
