use std::{
    fs::{self, File},
    io::{self, BufRead, BufReader, Write},
    path::Path,
    process,
};

use clap::{App, Arg, ArgMatches};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use shipgame::{simulate, Error, ErrorPolicy, SimulationConfig};

/// Why a run produced no output.
enum Failure {
    Io(io::Error),
    Simulation(Error),
}

impl From<io::Error> for Failure {
    fn from(err: io::Error) -> Self {
        Failure::Io(err)
    }
}

impl From<Error> for Failure {
    fn from(err: Error) -> Self {
        Failure::Simulation(err)
    }
}

fn main() {
    let matches = App::new("shipgame")
        .version("0.1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Runs a ship game from an input file and writes the surviving and sunk ships.")
        .arg(
            Arg::with_name("input")
                .value_name("INPUT")
                .help("file with the board size, placements, and commands")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("OUTPUT")
                .help("where to write the result")
                .takes_value(true)
                .default_value("output.txt"),
        )
        .arg(
            Arg::with_name("keep_going")
                .short("k")
                .long("keep-going")
                .help("skip commands that fail instead of stopping"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("log more detail; repeat for more"),
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));

    match run(&matches) {
        Ok(()) => {}
        Err(Failure::Io(err)) => {
            error!(error = %err, "i/o failure");
            eprintln!("error: {}", err);
            process::exit(1);
        }
        Err(Failure::Simulation(err)) => {
            error!(error = %err, kind = ?err.kind(), "simulation failed");
            eprintln!("error: {}", err);
            process::exit(1);
        }
    }
}

/// Install the stderr subscriber. `RUST_LOG` wins over the `-v` count when set.
fn init_logging(verbosity: u64) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn level_for(verbosity: u64) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Read the input, run the simulation, and write the report. Nothing is written unless
/// the whole run succeeds.
fn run(matches: &ArgMatches) -> Result<(), Failure> {
    // Both are required or defaulted.
    let input = Path::new(matches.value_of("input").unwrap());
    let output = Path::new(matches.value_of("output").unwrap());

    let config = SimulationConfig {
        on_error: if matches.is_present("keep_going") {
            ErrorPolicy::SkipAndContinue
        } else {
            ErrorPolicy::Abort
        },
    };

    info!(input = %input.display(), "reading game");
    let lines = read_lines(input)?;
    let report = simulate(&lines, config)?;

    info!(output = %output.display(), "writing result");
    write_report(output, &report.lines())?;
    Ok(())
}

/// Read every line of the file at `path`.
fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    BufReader::new(File::open(path)?).lines().collect()
}

/// Write `lines` to `path`, one per line. Writes to a sibling temporary file first so a
/// failed write never leaves a partial report behind.
fn write_report(path: &Path, lines: &[String]) -> io::Result<()> {
    let tmp = path.with_extension("tmp");
    {
        let mut out = io::BufWriter::new(File::create(&tmp)?);
        for line in lines {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;
    }
    fs::rename(&tmp, path)
}
