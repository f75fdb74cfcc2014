//! Parsing of the text command language into a typed [`GameSpec`].
//!
//! The input is line oriented:
//!
//! ```text
//! 10
//! (0, 0, N) (9, 2, E)
//! (0, 0) MRMLMM
//! (9, 2)
//! ```
//!
//! The first line is the board size and the second the initial placements. Every
//! following line is a move command `(x, y) OPS` or a shoot command `(x, y)`. Only the
//! first two lines can fail parsing outright; a bad command line becomes
//! [`Command::Invalid`] and fails when it is applied.
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::{
    board::{Coordinate, Placement},
    error::Error,
    units::Maneuver,
};

pub use self::errors::{CannotParseReason, ConfigError, ParseError};

mod errors;

/// A single order, resolved to its kind when the line is parsed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Command {
    /// Steer the unit at `origin` through the given operations.
    Move { origin: Coordinate, maneuver: Maneuver },
    /// Fire at the cell `target`.
    Shoot { target: Coordinate },
    /// A line that is neither a valid move nor a valid shoot. Applying it fails with
    /// the stored error, so the run's [`ErrorPolicy`](crate::ErrorPolicy) decides
    /// whether it ends the run.
    Invalid(ParseError),
}

/// Everything needed to run one simulation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameSpec {
    /// Number of cells along each axis of the board.
    pub size: usize,
    /// Initial placements in input order.
    pub placements: Vec<Placement>,
    /// Commands in input order.
    pub commands: Vec<Command>,
}

impl GameSpec {
    /// Parse a game from its input lines. The first two lines are required; running
    /// out of input before them is a [`ConfigError`]. Direction characters are not
    /// checked here; [`Board::place`](crate::Board::place) drops unknown ones.
    pub fn parse<I, S>(lines: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lines = lines.into_iter();

        let size = match lines.next() {
            Some(line) => parse_size(1, line.as_ref())?,
            None => return Err(ConfigError::MissingSize.into()),
        };
        let placements = match lines.next() {
            Some(line) => parse_placements(2, line.as_ref())?,
            None => return Err(ConfigError::MissingPlacements.into()),
        };

        let mut commands = Vec::new();
        for (idx, line) in lines.enumerate() {
            let line = line.as_ref();
            if line.trim().is_empty() {
                continue;
            }
            commands.push(parse_command(idx + 3, line).unwrap_or_else(Command::Invalid));
        }

        Ok(GameSpec {
            size,
            placements,
            commands,
        })
    }
}

impl FromStr for GameSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.lines())
    }
}

/// Parse the board size line.
fn parse_size(line_no: usize, line: &str) -> Result<usize, ParseError> {
    let text = line.trim();
    match text.parse::<usize>() {
        Ok(0) => Err(ParseError::new(
            line_no,
            CannotParseReason::NonPositiveSize(0),
        )),
        Ok(size) => Ok(size),
        Err(_) => match text.parse::<i64>() {
            Ok(size) => Err(ParseError::new(
                line_no,
                CannotParseReason::NonPositiveSize(size),
            )),
            Err(_) => Err(ParseError::new(
                line_no,
                CannotParseReason::InvalidSize(text.to_owned()),
            )),
        },
    }
}

/// Parse the placement line. Entries are `(x, y, D)` separated by optional
/// whitespace. A blank line is an empty list.
fn parse_placements(line_no: usize, line: &str) -> Result<Vec<Placement>, ParseError> {
    /// Matcher for a single placement entry.
    static PLACEMENT: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"(?x)\(\s*
        (?P<x>[0-9]+)\s*,\s*
        (?P<y>[0-9]+)\s*,\s*
        (?P<dir>[^\s,()])\s*
        \)",
        )
        .unwrap()
    });

    let malformed = |text: &str| {
        ParseError::new(
            line_no,
            CannotParseReason::MalformedPlacements(text.trim().to_owned()),
        )
    };

    let mut placements = Vec::new();
    let mut last = 0;
    for captures in PLACEMENT.captures_iter(line) {
        // Group 0 is always present and `dir` always matches exactly one letter.
        let whole = captures.get(0).unwrap();
        let gap = &line[last..whole.start()];
        if !gap.trim().is_empty() {
            return Err(malformed(gap));
        }
        last = whole.end();

        let coord = parse_coord(line_no, &captures)?;
        let facing = captures["dir"].chars().next().unwrap();
        placements.push(Placement::new(coord, facing));
    }
    let rest = &line[last..];
    if !rest.trim().is_empty() {
        return Err(malformed(rest));
    }
    Ok(placements)
}

/// Parse a move or shoot command line.
fn parse_command(line_no: usize, line: &str) -> Result<Command, ParseError> {
    /// Matcher for move commands, `(x, y) OPS`.
    static MOVE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)\(\s*
        (?P<x>[0-9]+)\s*,\s*
        (?P<y>[0-9]+)\s*
        \)\s+
        (?P<ops>\S+)$",
        )
        .unwrap()
    });
    /// Matcher for shoot commands, `(x, y)`.
    static SHOOT: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)\(\s*
        (?P<x>[0-9]+)\s*,\s*
        (?P<y>[0-9]+)\s*
        \)$",
        )
        .unwrap()
    });

    let text = line.trim();
    if let Some(captures) = MOVE.captures(text) {
        let origin = parse_coord(line_no, &captures)?;
        let maneuver = captures["ops"]
            .parse::<Maneuver>()
            .map_err(|reason| ParseError::new(line_no, CannotParseReason::Maneuver(reason)))?;
        Ok(Command::Move { origin, maneuver })
    } else if let Some(captures) = SHOOT.captures(text) {
        let target = parse_coord(line_no, &captures)?;
        Ok(Command::Shoot { target })
    } else {
        Err(ParseError::new(
            line_no,
            CannotParseReason::MalformedCommand(text.to_owned()),
        ))
    }
}

/// Extract the `x` and `y` groups of a match as a [`Coordinate`].
fn parse_coord(line_no: usize, captures: &Captures) -> Result<Coordinate, ParseError> {
    let component = |name: &str| -> Result<usize, ParseError> {
        let text = &captures[name];
        text.parse().map_err(|_| {
            ParseError::new(
                line_no,
                CannotParseReason::CoordinateTooLarge(text.to_owned()),
            )
        })
    };
    Ok(Coordinate::new(component("x")?, component("y")?))
}
