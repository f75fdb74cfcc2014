use thiserror::Error;

use crate::board::CannotMoveReason;

/// Error returned when the input is missing a line required to set up the board. Runs
/// that hit this cannot start at all.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum ConfigError {
    /// The first line, giving the board size, is missing.
    #[error("initialisation failed: board size line missing from input")]
    MissingSize,
    /// The second line, giving the initial placements, is missing.
    #[error("initialisation failed: placement line missing from input")]
    MissingPlacements,
}

/// Reason why a line of input could not be parsed.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum CannotParseReason {
    /// The board size is not an integer.
    #[error("board size {0:?} is not an integer")]
    InvalidSize(String),
    /// The board size is an integer, but not a positive one.
    #[error("board size must be a positive integer, got {0}")]
    NonPositiveSize(i64),
    /// The placement line contains text that is not a `(x, y, D)` entry.
    #[error("malformed placement list near {0:?}")]
    MalformedPlacements(String),
    /// The line is neither a move nor a shoot command.
    #[error("{0:?} is neither a move nor a shoot command")]
    MalformedCommand(String),
    /// A coordinate does not fit in the coordinate type.
    #[error("coordinate {0:?} is too large")]
    CoordinateTooLarge(String),
    /// The operations of a move command are invalid.
    #[error(transparent)]
    Maneuver(CannotMoveReason),
}

/// Error caused by a line of input that does not follow the command language.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("line {line}: {reason}")]
pub struct ParseError {
    /// 1-based line number in the input.
    line: usize,
    #[source]
    reason: CannotParseReason,
}

impl ParseError {
    /// Construct a parse error for the given 1-based line.
    pub(super) fn new(line: usize, reason: CannotParseReason) -> Self {
        Self { line, reason }
    }

    /// Get the 1-based line number where parsing failed.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Get the reason parsing failed.
    pub fn reason(&self) -> &CannotParseReason {
        &self.reason
    }
}
