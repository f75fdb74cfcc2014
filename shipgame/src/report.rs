//! Text report of the final board.
use std::fmt;

use crate::{
    board::{Board, Coordinate},
    simulation::SunkRecord,
    units::Direction,
};

/// A unit still on the board at the end of a run.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Survivor {
    /// Cell the unit occupies.
    pub coord: Coordinate,
    /// Facing of the unit.
    pub facing: Direction,
}

impl fmt::Display for Survivor {
    /// Writes the unit in the report format, `(x, y, D)`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.coord, self.facing)
    }
}

/// Surviving units in board creation order, followed by sunk units in the order they
/// were destroyed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Report {
    survivors: Vec<Survivor>,
    sunk: Vec<SunkRecord>,
}

impl Report {
    /// Snapshot the given board and sunk list.
    pub fn new(board: &Board, sunk: &[SunkRecord]) -> Self {
        Self {
            survivors: board
                .units()
                .map(|(coord, facing)| Survivor { coord, facing })
                .collect(),
            sunk: sunk.to_vec(),
        }
    }

    /// The report as output lines, without line terminators.
    pub fn lines(&self) -> Vec<String> {
        self.survivors
            .iter()
            .map(ToString::to_string)
            .chain(self.sunk.iter().map(ToString::to_string))
            .collect()
    }
}

impl fmt::Display for Report {
    /// Writes every line of the report, each followed by `\n`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for survivor in &self.survivors {
            writeln!(f, "{}", survivor)?;
        }
        for record in &self.sunk {
            writeln!(f, "{}", record)?;
        }
        Ok(())
    }
}
