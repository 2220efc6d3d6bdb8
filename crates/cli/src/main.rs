//! RISC-V ISA regression harness CLI.
//!
//! This binary drives a RISC-V simulation executable over a tree of compiled
//! ISA tests. It performs:
//! 1. **Argument validation:** Simulator path, corpus root, logs directory, optional verbosity.
//! 2. **Run setup:** Creates the logs directory if absent and derives the architecture from the simulator path.
//! 3. **The run:** Traverses the corpus, executes every applicable test, and prints the final tally.

use std::path::PathBuf;
use std::{env, fs, process};

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use rvregress_core::common::ConfigError;
use rvregress_core::run::Verbosity;
use rvregress_core::{Harness, HarnessConfig};

#[derive(Parser, Debug)]
#[command(
    name = "regress",
    author,
    version,
    about = "Run a RISC-V simulation executable over the standard ISA test suite",
    long_about = "Runs the RISC-V simulation executable with ELF files from the test root and its\n\
        sub-directories, selecting only the files relevant to the architecture the\n\
        simulator implements. The architecture must be somewhere in the simulation\n\
        executable pathname (see example below). For each ELF file FOO, simulation\n\
        output is saved in <LOGS_DIR>/FOO.log.\n\n\
        Example:\n    \
        regress ../builds/RV32IMU_verilator/exe_HW_sim ./isa ./Logs v1\n\
        runs the simulation executable on the ISA tests isa/rv32ui-p*, isa/rv32mi-p*\n\
        and isa/rv32um-p* (relevant for architecture RV32IMU, taken from the\n\
        executable path) and leaves a transcript of each test in files like\n\
        ./Logs/rv32ui-p-add.log, each with an instruction trace (because of 'v1')."
)]
struct Cli {
    /// Simulation executable; the architecture (e.g. RV32IMU) must appear somewhere in this path.
    sim_exe: PathBuf,

    /// Root directory searched recursively for ISA test ELF files.
    tests_dir: PathBuf,

    /// Directory receiving per-test logs and trace files (created if absent).
    logs_dir: PathBuf,

    /// Optional verbosity: v1 prints an instruction trace, v2 prints pipeline stage state.
    #[arg(value_parser = parse_verbosity)]
    verbosity: Option<Verbosity>,
}

/// Parses the verbosity positional through the library's error type.
fn parse_verbosity(arg: &str) -> Result<Verbosity, ConfigError> {
    arg.parse()
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = err.print();
                return;
            }
            // An argument count below the minimum or above the maximum prints
            // the usage text and is not a failure.
            ErrorKind::MissingRequiredArgument | ErrorKind::UnknownArgument => {
                let _ = Cli::command().print_long_help();
                return;
            }
            // Anything else (e.g. an unrecognized verbosity value) is a
            // distinct non-success exit.
            _ => err.exit(),
        },
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Lexical absolutization only: a symlinked build directory must keep the
    // architecture marker in its name.
    let sim_path = std::path::absolute(&cli.sim_exe).unwrap_or(cli.sim_exe);
    let tests_root = std::path::absolute(&cli.tests_dir).unwrap_or(cli.tests_dir);
    let logs_dir = std::path::absolute(&cli.logs_dir).unwrap_or(cli.logs_dir);

    if !logs_dir.is_dir() {
        println!("Creating dir: {}", logs_dir.display());
        if let Err(err) = fs::create_dir_all(&logs_dir) {
            eprintln!("ERROR: cannot create logs dir {}: {}", logs_dir.display(), err);
            process::exit(1);
        }
    }

    let work_dir = env::current_dir().unwrap_or_else(|err| {
        eprintln!("ERROR: cannot determine working directory: {}", err);
        process::exit(1);
    });

    let config = HarnessConfig::default();
    let verbosity = cli.verbosity.unwrap_or_default();

    let harness = Harness::new(
        &config,
        &sim_path,
        &tests_root,
        &logs_dir,
        &work_dir,
        verbosity,
    )
    .unwrap_or_else(|err| {
        eprintln!("ERROR: {}", err);
        process::exit(1);
    });

    match harness.run() {
        Ok(stats) => stats.print(),
        Err(err) => {
            eprintln!("ERROR: {}", err);
            process::exit(1);
        }
    }
}
