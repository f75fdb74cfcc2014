//! Types describing units on the board: which way they face and the operations that
//! steer them.
use std::{fmt, ops::Deref, str::FromStr};

use crate::board::CannotMoveReason;

/// Facing of a unit. The variants are ordered clockwise, so rotation is arithmetic
/// modulo 4 over [`Direction::ALL`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Facing increasing `y`.
    N,
    /// Facing increasing `x`.
    E,
    /// Facing decreasing `y`.
    S,
    /// Facing decreasing `x`.
    W,
}

impl Direction {
    /// All directions in clockwise order starting from north.
    pub const ALL: &'static [Direction] = &[
        Direction::N,
        Direction::E,
        Direction::S,
        Direction::W,
    ];

    /// Look up the direction with the given letter. Only uppercase `N`, `E`, `S`, and
    /// `W` are recognized.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'N' => Some(Direction::N),
            'E' => Some(Direction::E),
            'S' => Some(Direction::S),
            'W' => Some(Direction::W),
            _ => None,
        }
    }

    /// The letter used for this direction in the text format.
    pub fn letter(self) -> char {
        match self {
            Direction::N => 'N',
            Direction::E => 'E',
            Direction::S => 'S',
            Direction::W => 'W',
        }
    }

    /// Position of this direction in [`Direction::ALL`].
    fn index(self) -> usize {
        self as usize
    }

    /// The direction one step clockwise from this one.
    pub fn right(self) -> Self {
        Self::ALL[(self.index() + 1) % 4]
    }

    /// The direction one step counter-clockwise from this one.
    pub fn left(self) -> Self {
        Self::ALL[(self.index() + 3) % 4]
    }

    /// Change in `(x, y)` for one step forward while facing this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::N => (0, 1),
            Direction::E => (1, 0),
            Direction::S => (0, -1),
            Direction::W => (-1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A single step of a move command.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Op {
    /// `M`: advance one cell in the current facing.
    Forward,
    /// `L`: rotate counter-clockwise.
    TurnLeft,
    /// `R`: rotate clockwise.
    TurnRight,
}

impl Op {
    /// Look up the operation for the given character, if it is one of `M`, `L`, `R`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'M' => Some(Op::Forward),
            'L' => Some(Op::TurnLeft),
            'R' => Some(Op::TurnRight),
            _ => None,
        }
    }

    /// The character used for this operation in the text format.
    pub fn as_char(self) -> char {
        match self {
            Op::Forward => 'M',
            Op::TurnLeft => 'L',
            Op::TurnRight => 'R',
        }
    }
}

/// Validated sequence of operations for a single move command.
///
/// This is the only place raw operation text becomes [`Op`]s, so an unknown character
/// is always reported as [`CannotMoveReason::InvalidOperation`] and an empty string as
/// [`CannotMoveReason::NoOperations`].
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Maneuver(Vec<Op>);

impl Maneuver {
    /// Build a maneuver from already-typed operations. Fails if `ops` is empty.
    pub fn new(ops: Vec<Op>) -> Result<Self, CannotMoveReason> {
        if ops.is_empty() {
            Err(CannotMoveReason::NoOperations)
        } else {
            Ok(Maneuver(ops))
        }
    }

    /// Returns true if the maneuver contains at least one [`Op::Forward`]. A maneuver
    /// without one is a pure rotation and never relocates the unit.
    pub fn relocates(&self) -> bool {
        self.0.contains(&Op::Forward)
    }
}

impl Deref for Maneuver {
    type Target = [Op];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for Maneuver {
    type Err = CannotMoveReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ops = s
            .chars()
            .map(|c| Op::from_char(c).ok_or(CannotMoveReason::InvalidOperation(c)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(ops)
    }
}

impl fmt::Display for Maneuver {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for op in self.iter() {
            write!(f, "{}", op.as_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_is_a_four_cycle() {
        assert_eq!(Direction::N.left(), Direction::W);
        assert_eq!(Direction::W.left(), Direction::S);
        assert_eq!(Direction::S.left(), Direction::E);
        assert_eq!(Direction::E.left(), Direction::N);

        assert_eq!(Direction::N.right(), Direction::E);
        assert_eq!(Direction::E.right(), Direction::S);
        assert_eq!(Direction::S.right(), Direction::W);
        assert_eq!(Direction::W.right(), Direction::N);

        for &dir in Direction::ALL {
            assert_eq!(dir.left().right(), dir);
            assert_eq!(dir.right().right().right().right(), dir);
        }
    }

    #[test]
    fn letters() {
        for &dir in Direction::ALL {
            assert_eq!(Direction::from_letter(dir.letter()), Some(dir));
        }
        assert_eq!(Direction::from_letter('n'), None);
        assert_eq!(Direction::from_letter('X'), None);
    }

    #[test]
    fn parse_maneuver() {
        let maneuver: Maneuver = "MRL".parse().unwrap();
        assert_eq!(&*maneuver, &[Op::Forward, Op::TurnRight, Op::TurnLeft][..]);
        assert!(maneuver.relocates());
        assert_eq!(maneuver.to_string(), "MRL");

        let rotation: Maneuver = "LLR".parse().unwrap();
        assert!(!rotation.relocates());
    }

    #[test]
    fn parse_maneuver_errors() {
        assert_eq!("".parse::<Maneuver>(), Err(CannotMoveReason::NoOperations));
        assert_eq!(
            "MMX".parse::<Maneuver>(),
            Err(CannotMoveReason::InvalidOperation('X'))
        );
        assert_eq!(Maneuver::new(Vec::new()), Err(CannotMoveReason::NoOperations));
    }
}
