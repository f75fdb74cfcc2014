use proptest::prelude::*;
use shipgame::{Board, Coordinate, Direction, MoveOutcome, Op, Placement, ShotOutcome, Simulation};

const SIZE: usize = 6;

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Forward), Just(Op::TurnLeft), Just(Op::TurnRight)]
}

fn turn() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::TurnLeft), Just(Op::TurnRight)]
}

fn direction() -> impl Strategy<Value = Direction> {
    (0..4usize).prop_map(|i| Direction::ALL[i])
}

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (0..SIZE, 0..SIZE).prop_map(Coordinate::from)
}

fn placements() -> impl Strategy<Value = Vec<Placement>> {
    prop::collection::vec((coordinate(), direction()).prop_map(Placement::from), 0..12)
}

fn populated_board(placements: &[Placement]) -> Board {
    let mut board = Board::new(SIZE).unwrap();
    board.place(placements);
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn new_board_has_size_squared_empty_cells(size in 1usize..40) {
        let board = Board::new(size).unwrap();
        prop_assert_eq!(board.cells().count(), size * size);
        prop_assert!(board.cells().all(|(_, cell)| cell.is_empty()));
    }

    #[test]
    fn placement_keeps_first_writer(placements in placements()) {
        let board = populated_board(&placements);
        for (coord, facing) in board.units() {
            let first = placements.iter().find(|p| p.coord == coord).unwrap();
            prop_assert_eq!(first.direction(), Some(facing));
        }
    }

    #[test]
    fn rotation_never_relocates(
        start in direction(),
        turns in prop::collection::vec(turn(), 1..16),
    ) {
        let origin = Coordinate::new(2, 3);
        let mut board = populated_board(&[Placement::from((origin, start))]);
        let outcome = board.move_unit(origin, &turns).unwrap();

        let net = turns.iter().fold(0isize, |acc, op| match op {
            Op::TurnRight => acc + 1,
            _ => acc - 1,
        });
        let expected = Direction::ALL[(net.rem_euclid(4)) as usize];
        prop_assert_eq!(outcome, MoveOutcome::Rotated { at: origin, facing: expected });
        prop_assert_eq!(board.units().collect::<Vec<_>>(), vec![(origin, expected)]);
    }

    #[test]
    fn moves_conserve_units(
        placements in placements(),
        moves in prop::collection::vec((coordinate(), prop::collection::vec(op(), 1..10)), 1..10),
    ) {
        let mut board = populated_board(&placements);
        let count = board.units().count();
        for (origin, ops) in moves {
            let before: Vec<_> = board.units().collect();
            match board.move_unit(origin, &ops) {
                Ok(MoveOutcome::Blocked { .. }) | Err(_) => {
                    prop_assert_eq!(board.units().collect::<Vec<_>>(), before);
                }
                Ok(_) => {}
            }
            prop_assert_eq!(board.units().count(), count);
        }
    }

    #[test]
    fn shooting_removes_exactly_one_unit(placements in placements(), target in coordinate()) {
        let mut sim = Simulation::with_board(populated_board(&placements));
        let before = sim.board().get(target).unwrap();
        let count = sim.board().units().count();

        let outcome = sim.shoot(target).unwrap();
        prop_assert!(sim.board().get(target).unwrap().is_empty());
        match before.unit() {
            Some(facing) => {
                prop_assert_eq!(outcome.sunk().map(|r| (r.coord, r.facing)), Some((target, facing)));
                prop_assert_eq!(sim.sunk().len(), 1);
                prop_assert_eq!(sim.board().units().count(), count - 1);
            }
            None => {
                prop_assert_eq!(outcome, ShotOutcome::Miss);
                prop_assert!(sim.sunk().is_empty());
            }
        }
        prop_assert_eq!(
            sim.report().lines().len(),
            sim.board().units().count() + sim.sunk().len()
        );
    }
}
