//! Crate-level error type.

use thiserror::Error;

use crate::{
    board::{BoundsError, CannotMoveReason, CannotShootReason, MoveError, ShotError},
    command::{CannotParseReason, ConfigError, ParseError},
};

/// Any failure while parsing, building, or running a simulation.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum Error {
    /// A required input line is missing. The run cannot start.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A line does not follow the command language.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The board could not be created.
    #[error(transparent)]
    Bounds(#[from] BoundsError),
    /// A move command failed.
    #[error(transparent)]
    Move(#[from] MoveError),
    /// A shoot command failed.
    #[error(transparent)]
    Shot(#[from] ShotError),
    /// The simulation was started without any commands.
    #[error("no commands to simulate")]
    EmptyCommands,
}

/// Classification of an [`Error`], independent of where it was raised.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// The size or placement line is missing.
    Config,
    /// The size is not a positive integer, or a line is malformed.
    Parse,
    /// A move command has no operations.
    EmptyMove,
    /// A move command has an operation other than `M`, `L`, `R`.
    InvalidOp,
    /// A move command names an empty origin cell.
    NoUnit,
    /// A coordinate is off the board, or the board size is unusable.
    Bounds,
    /// There are no commands to simulate.
    EmptyCommands,
}

impl Error {
    /// Get the [`ErrorKind`] of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Config(_) => ErrorKind::Config,
            Error::Parse(err) => match err.reason() {
                CannotParseReason::Maneuver(reason) => move_kind(*reason),
                _ => ErrorKind::Parse,
            },
            Error::Bounds(_) => ErrorKind::Bounds,
            Error::Move(err) => move_kind(err.reason()),
            Error::Shot(err) => match err.reason() {
                CannotShootReason::OutOfBounds => ErrorKind::Bounds,
            },
            Error::EmptyCommands => ErrorKind::EmptyCommands,
        }
    }
}

fn move_kind(reason: CannotMoveReason) -> ErrorKind {
    match reason {
        CannotMoveReason::NoOperations => ErrorKind::EmptyMove,
        CannotMoveReason::InvalidOperation(_) => ErrorKind::InvalidOp,
        CannotMoveReason::NoUnit => ErrorKind::NoUnit,
        CannotMoveReason::OriginOutOfBounds | CannotMoveReason::DestinationOutOfBounds(..) => {
            ErrorKind::Bounds
        }
    }
}
