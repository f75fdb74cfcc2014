//! Rotation and relocation of units.
use std::convert::TryFrom;

use tracing::debug;

use crate::{
    board::{Board, CannotMoveReason, Cell, Coordinate, MoveError},
    units::{Direction, Maneuver, Op},
};

/// Result of a move command that did not fail.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MoveOutcome {
    /// The move had no forward steps. The unit turned in place.
    Rotated {
        at: Coordinate,
        facing: Direction,
    },
    /// The unit left `from` and now occupies `to`.
    Moved {
        from: Coordinate,
        to: Coordinate,
        facing: Direction,
    },
    /// The destination was occupied, so the whole move was discarded and the board is
    /// unchanged.
    Blocked {
        origin: Coordinate,
        destination: Coordinate,
    },
}

impl MoveOutcome {
    /// Returns true if the move was discarded.
    pub fn is_blocked(&self) -> bool {
        match self {
            MoveOutcome::Blocked { .. } => true,
            _ => false,
        }
    }
}

/// Position of a unit while its path is being plotted. Intermediate positions may be
/// off the board, including below zero, so this is signed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
struct Cursor {
    x: isize,
    y: isize,
}

impl Cursor {
    fn step(self, facing: Direction) -> Self {
        let (dx, dy) = facing.delta();
        Cursor {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Convert back to a [`Coordinate`]. Returns `None` if either component is
    /// negative.
    fn to_coordinate(self) -> Option<Coordinate> {
        let x = usize::try_from(self.x).ok()?;
        let y = usize::try_from(self.y).ok()?;
        Some(Coordinate::new(x, y))
    }
}

impl From<Coordinate> for Cursor {
    fn from(coord: Coordinate) -> Self {
        // Board sizes are bounded by `size * size <= usize::MAX`, so every in-bounds
        // component fits in an isize.
        Cursor {
            x: coord.x as isize,
            y: coord.y as isize,
        }
    }
}

/// Follow `ops` from `start` without looking at the board. Returns where the unit ends
/// and which way it faces.
fn plot(start: Coordinate, facing: Direction, ops: &[Op]) -> (Cursor, Direction) {
    ops.iter()
        .fold((Cursor::from(start), facing), |(pos, facing), op| match op {
            Op::Forward => (pos.step(facing), facing),
            Op::TurnLeft => (pos, facing.left()),
            Op::TurnRight => (pos, facing.right()),
        })
}

impl Board {
    /// Steer the unit at `origin` through `ops`.
    ///
    /// The path is plotted in full before the board is touched, so units pass freely
    /// through occupied cells and may even leave the board part way. Only the final
    /// cell matters:
    ///
    /// * With no [`Op::Forward`] the unit turns in place.
    /// * If the final cell is empty the unit moves there.
    /// * If the final cell is occupied the move is discarded and
    ///   [`MoveOutcome::Blocked`] is returned. Returning to `origin` counts as occupied.
    /// * If the final cell is off the board the move fails.
    pub fn move_unit(
        &mut self,
        origin: Coordinate,
        ops: &[Op],
    ) -> Result<MoveOutcome, MoveError> {
        if ops.is_empty() {
            return Err(MoveError::new(CannotMoveReason::NoOperations, origin));
        }
        let facing = match self.grid.get(origin) {
            None => {
                return Err(MoveError::new(
                    CannotMoveReason::OriginOutOfBounds,
                    origin,
                ))
            }
            Some(Cell::Empty) => return Err(MoveError::new(CannotMoveReason::NoUnit, origin)),
            Some(Cell::Occupied(facing)) => *facing,
        };

        let (end, facing) = plot(origin, facing, ops);

        if !ops.contains(&Op::Forward) {
            self.grid[origin] = Cell::Occupied(facing);
            return Ok(MoveOutcome::Rotated { at: origin, facing });
        }

        let destination = match end.to_coordinate() {
            Some(coord) if self.grid.dim.check_bounds(coord).is_some() => coord,
            _ => {
                return Err(MoveError::new(
                    CannotMoveReason::DestinationOutOfBounds(end.x, end.y),
                    origin,
                ))
            }
        };
        if !self.grid[destination].is_empty() {
            debug!(%origin, %destination, "move discarded, destination occupied");
            return Ok(MoveOutcome::Blocked {
                origin,
                destination,
            });
        }

        // Bounds of both cells were checked above.
        self.grid[origin] = Cell::Empty;
        self.grid[destination] = Cell::Occupied(facing);
        Ok(MoveOutcome::Moved {
            from: origin,
            to: destination,
            facing,
        })
    }

    /// Like [`Board::move_unit`], but takes the operations as text. Characters other
    /// than `M`, `L`, `R` fail with [`CannotMoveReason::InvalidOperation`].
    pub fn move_unit_str(
        &mut self,
        origin: Coordinate,
        ops: &str,
    ) -> Result<MoveOutcome, MoveError> {
        let maneuver = ops
            .parse::<Maneuver>()
            .map_err(|reason| MoveError::new(reason, origin))?;
        self.move_unit(origin, &maneuver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Placement;

    fn coord(x: usize, y: usize) -> Coordinate {
        Coordinate::new(x, y)
    }

    fn board_with(size: usize, units: &[(usize, usize, Direction)]) -> Board {
        let mut board = Board::new(size).unwrap();
        let placements: Vec<Placement> = units
            .iter()
            .map(|&(x, y, dir)| Placement::from((coord(x, y), dir)))
            .collect();
        board.place(&placements);
        board
    }

    #[test]
    fn example_path() {
        let mut board = board_with(10, &[(0, 0, Direction::N)]);
        let outcome = board.move_unit_str(coord(0, 0), "MRMLMM").unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                from: coord(0, 0),
                to: coord(1, 3),
                facing: Direction::N,
            }
        );
        assert_eq!(board.get(coord(0, 0)), Some(Cell::Empty));
        assert_eq!(board.get(coord(1, 3)), Some(Cell::Occupied(Direction::N)));
    }

    #[test]
    fn rotate_in_place() {
        let mut board = board_with(3, &[(1, 1, Direction::N)]);
        let outcome = board.move_unit_str(coord(1, 1), "L").unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Rotated {
                at: coord(1, 1),
                facing: Direction::W,
            }
        );
        assert_eq!(board.get(coord(1, 1)), Some(Cell::Occupied(Direction::W)));

        board.move_unit_str(coord(1, 1), "R").unwrap();
        assert_eq!(board.get(coord(1, 1)), Some(Cell::Occupied(Direction::N)));

        board.move_unit_str(coord(1, 1), "RRR").unwrap();
        assert_eq!(board.get(coord(1, 1)), Some(Cell::Occupied(Direction::W)));
    }

    #[test]
    fn pass_through_occupied_cells() {
        let mut board = board_with(5, &[(0, 0, Direction::N), (0, 1, Direction::E)]);
        board.move_unit_str(coord(0, 0), "MM").unwrap();
        assert_eq!(board.get(coord(0, 0)), Some(Cell::Empty));
        assert_eq!(board.get(coord(0, 1)), Some(Cell::Occupied(Direction::E)));
        assert_eq!(board.get(coord(0, 2)), Some(Cell::Occupied(Direction::N)));
    }

    #[test]
    fn blocked_move_is_discarded() {
        let mut board = board_with(5, &[(0, 0, Direction::N), (0, 2, Direction::E)]);
        let outcome = board.move_unit_str(coord(0, 0), "MMR").unwrap();
        assert!(outcome.is_blocked());
        assert_eq!(board.get(coord(0, 0)), Some(Cell::Occupied(Direction::N)));
        assert_eq!(board.get(coord(0, 2)), Some(Cell::Occupied(Direction::E)));
    }

    #[test]
    fn returning_to_origin_is_blocked() {
        let mut board = board_with(5, &[(2, 2, Direction::N)]);
        let outcome = board.move_unit_str(coord(2, 2), "MRRM").unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Blocked {
                origin: coord(2, 2),
                destination: coord(2, 2),
            }
        );
        assert_eq!(board.get(coord(2, 2)), Some(Cell::Occupied(Direction::N)));
    }

    #[test]
    fn path_may_leave_the_board() {
        let mut board = board_with(3, &[(0, 0, Direction::W)]);
        board.move_unit_str(coord(0, 0), "MRRMM").unwrap();
        assert_eq!(board.get(coord(1, 0)), Some(Cell::Occupied(Direction::E)));
    }

    #[test]
    fn destination_out_of_bounds() {
        let mut board = board_with(3, &[(0, 0, Direction::S), (2, 2, Direction::N)]);
        let err = board.move_unit_str(coord(0, 0), "M").unwrap_err();
        assert_eq!(
            err.reason(),
            CannotMoveReason::DestinationOutOfBounds(0, -1)
        );
        let err = board.move_unit_str(coord(2, 2), "M").unwrap_err();
        assert_eq!(err.reason(), CannotMoveReason::DestinationOutOfBounds(2, 3));
        assert_eq!(board.units().count(), 2);
    }

    #[test]
    fn move_errors() {
        let mut board = board_with(3, &[(0, 0, Direction::N)]);
        assert_eq!(
            board.move_unit(coord(0, 0), &[]).unwrap_err().reason(),
            CannotMoveReason::NoOperations
        );
        assert_eq!(
            board.move_unit_str(coord(0, 0), "").unwrap_err().reason(),
            CannotMoveReason::NoOperations
        );
        assert_eq!(
            board.move_unit_str(coord(0, 0), "MZ").unwrap_err().reason(),
            CannotMoveReason::InvalidOperation('Z')
        );
        let err = board.move_unit_str(coord(1, 1), "M").unwrap_err();
        assert_eq!(err.reason(), CannotMoveReason::NoUnit);
        assert_eq!(err.origin(), &coord(1, 1));
        assert_eq!(
            board.move_unit_str(coord(3, 0), "M").unwrap_err().reason(),
            CannotMoveReason::OriginOutOfBounds
        );
        assert_eq!(board.get(coord(0, 0)), Some(Cell::Occupied(Direction::N)));
    }
}
