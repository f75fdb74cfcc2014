//! Replays commands against a board and keeps track of sunk units.
use tracing::{debug, info, warn};

use crate::{
    board::{Board, BoundsError, Coordinate, MoveError, ShotError},
    command::{Command, GameSpec},
    error::Error,
    report::Report,
    units::Op,
};

pub use self::{
    combat::{ShotOutcome, SunkRecord},
    movement::MoveOutcome,
};

mod combat;
mod movement;

/// What to do when a command fails part way through a run.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorPolicy {
    /// Stop at the first failing command and return its error.
    Abort,
    /// Record the failure and carry on with the next command.
    SkipAndContinue,
}

impl Default for ErrorPolicy {
    fn default() -> Self {
        ErrorPolicy::Abort
    }
}

/// Settings for a [`Simulation`].
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct SimulationConfig {
    /// How failing commands are handled by [`Simulation::run`].
    pub on_error: ErrorPolicy,
}

/// Result of a command that was applied.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CommandOutcome {
    /// A move command was applied.
    Move(MoveOutcome),
    /// A shoot command was applied.
    Shot(ShotOutcome),
}

/// Counts of what happened during [`Simulation::run`].
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct RunSummary {
    /// Commands that were applied, including blocked moves and misses.
    pub applied: usize,
    /// Moves discarded because the destination was occupied.
    pub blocked: usize,
    /// Shots that sunk a unit.
    pub sunk: usize,
    /// Commands that failed and were skipped, with their position in the command list.
    pub skipped: Vec<(usize, Error)>,
}

/// State of a single run: the board and the units sunk so far.
#[derive(Debug, Clone)]
pub struct Simulation {
    board: Board,
    sunk: Vec<SunkRecord>,
    config: SimulationConfig,
}

impl Simulation {
    /// Start a simulation on an empty board of the given size.
    pub fn new(size: usize) -> Result<Self, BoundsError> {
        Ok(Self::with_board(Board::new(size)?))
    }

    /// Start a simulation on an existing board.
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            sunk: Vec::new(),
            config: SimulationConfig::default(),
        }
    }

    /// Build the board described by `spec` and place its units. The commands of the
    /// spec are not applied.
    pub fn from_spec(spec: &GameSpec) -> Result<Self, Error> {
        let mut board = Board::new(spec.size)?;
        let placed = board.place(&spec.placements);
        info!(
            size = spec.size,
            placed,
            dropped = spec.placements.len() - placed,
            "board initialised"
        );
        Ok(Self::with_board(board))
    }

    /// Replace the configuration of this simulation.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Units sunk so far, in the order they were destroyed.
    pub fn sunk(&self) -> &[SunkRecord] {
        &self.sunk
    }

    /// Steer the unit at `origin`. See [`Board::move_unit`].
    pub fn move_unit(
        &mut self,
        origin: Coordinate,
        ops: &[Op],
    ) -> Result<MoveOutcome, MoveError> {
        self.board.move_unit(origin, ops)
    }

    /// Fire at `target`, recording the unit if one is sunk. See [`Board::shoot`].
    pub fn shoot(&mut self, target: Coordinate) -> Result<ShotOutcome, ShotError> {
        let outcome = self.board.shoot(target)?;
        if let ShotOutcome::Sunk(record) = outcome {
            self.sunk.push(record);
        }
        Ok(outcome)
    }

    /// Apply a single command. [`Command::Invalid`] fails with its parse error and
    /// leaves the board untouched.
    pub fn apply(&mut self, command: &Command) -> Result<CommandOutcome, Error> {
        let outcome = match command {
            Command::Move { origin, maneuver } => {
                CommandOutcome::Move(self.move_unit(*origin, maneuver)?)
            }
            Command::Shoot { target } => CommandOutcome::Shot(self.shoot(*target)?),
            Command::Invalid(err) => return Err(err.clone().into()),
        };
        debug!(?command, ?outcome, "applied command");
        Ok(outcome)
    }

    /// Apply `commands` in order. An empty list is an error. Failing commands are
    /// handled according to [`SimulationConfig::on_error`].
    pub fn run(&mut self, commands: &[Command]) -> Result<RunSummary, Error> {
        if commands.is_empty() {
            return Err(Error::EmptyCommands);
        }
        info!(commands = commands.len(), "running simulation");

        let mut summary = RunSummary::default();
        for (idx, command) in commands.iter().enumerate() {
            match self.apply(command) {
                Ok(outcome) => {
                    summary.applied += 1;
                    match outcome {
                        CommandOutcome::Move(MoveOutcome::Blocked { .. }) => {
                            summary.blocked += 1
                        }
                        CommandOutcome::Shot(ShotOutcome::Sunk(_)) => summary.sunk += 1,
                        _ => {}
                    }
                }
                Err(err) => match self.config.on_error {
                    ErrorPolicy::Abort => return Err(err),
                    ErrorPolicy::SkipAndContinue => {
                        warn!(command = idx, error = %err, "skipping failed command");
                        summary.skipped.push((idx, err));
                    }
                },
            }
        }

        info!(
            applied = summary.applied,
            blocked = summary.blocked,
            sunk = summary.sunk,
            skipped = summary.skipped.len(),
            "simulation finished"
        );
        Ok(summary)
    }

    /// Build the report of surviving and sunk units.
    pub fn report(&self) -> Report {
        Report::new(&self.board, &self.sunk)
    }
}

/// Parse `lines`, run every command, and return the final report.
pub fn simulate<I, S>(lines: I, config: SimulationConfig) -> Result<Report, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let spec = GameSpec::parse(lines)?;
    let mut sim = Simulation::from_spec(&spec)?.with_config(config);
    sim.run(&spec.commands)?;
    Ok(sim.report())
}
