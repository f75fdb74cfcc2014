//! Deterministic simulation of directional units on a square grid.
//!
//! A game is described by a short text: the board size, the initial placements, and a
//! list of move and shoot commands. [`GameSpec`] parses that text, [`Simulation`]
//! replays the commands against a [`Board`], and [`Report`] renders what is left.
//!
//! ```
//! use shipgame::{simulate, SimulationConfig};
//!
//! let input = "10\n(0, 0, N) (9, 2, E)\n(0, 0) MRMLMM\n(9, 2)";
//! let report = simulate(input.lines(), SimulationConfig::default()).unwrap();
//! assert_eq!(report.lines(), vec!["(1, 3, N)", "(9, 2, E) SUNK"]);
//! ```

pub use self::{
    board::{Board, Cell, Coordinate, Placement, SquareDimensions},
    command::{Command, GameSpec},
    error::{Error, ErrorKind},
    report::{Report, Survivor},
    simulation::{
        simulate, CommandOutcome, ErrorPolicy, MoveOutcome, RunSummary, ShotOutcome, Simulation,
        SimulationConfig, SunkRecord,
    },
    units::{Direction, Maneuver, Op},
};

pub mod board;
pub mod command;
mod error;
mod report;
pub mod simulation;
pub mod units;
