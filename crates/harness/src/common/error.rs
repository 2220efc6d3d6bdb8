//! Error definitions for the regression harness.
//!
//! This module defines the failure modes of a regression run. It provides:
//! 1. **Configuration errors:** Problems detected before any test runs (bad simulator path, no architecture marker, bad verbosity). These abort the run.
//! 2. **Execution errors:** Problems launching a subprocess stage or persisting its artifacts. These also abort the run and surface the underlying OS error.
//! 3. **A run-level error:** The union of the two, returned by the top-level harness.
//!
//! A test whose output lacks the `PASS` marker is an expected outcome, recorded
//! in the run counters; it is deliberately absent from this taxonomy.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal configuration problems detected before the traversal starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The simulation executable path does not exist on disk.
    #[error("the given simulation path does not seem to exist: {0}")]
    SimulatorNotFound(PathBuf),

    /// No `RV32`/`RV64` marker was found in the simulator path.
    ///
    /// The architecture must appear somewhere in the simulation executable
    /// pathname; without it the harness cannot decide which test families
    /// apply.
    #[error("cannot find architecture string beginning with RV32 or RV64 in simulator path: {0}")]
    NoArchMarker(String),

    /// The verbosity argument was not one of the recognized values.
    #[error("unknown verbosity flag: {0} (expected v1 or v2)")]
    UnknownVerbosity(String),

    /// A configuration file could not be read.
    #[error("cannot read config file {path}: {source}")]
    ReadConfig {
        /// Path of the file that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be parsed.
    #[error("malformed config: {0}")]
    ParseConfig(#[from] serde_json::Error),
}

/// Fatal problems while executing a test or persisting its artifacts.
///
/// A subprocess that launches and then exits non-zero is *not* an error:
/// its captured output is still searched for the pass marker.
#[derive(Debug, Error)]
pub enum ExecError {
    /// A pipeline stage could not be launched at all.
    #[error("failed to launch {stage} command '{program}': {source}")]
    Spawn {
        /// Which pipeline stage failed (`elf_to_hex` or `simulator`).
        stage: &'static str,
        /// The program that could not be started.
        program: String,
        /// Underlying OS error (not found, not executable, ...).
        #[source]
        source: std::io::Error,
    },

    /// The per-test log file could not be written.
    #[error("failed to write log {path}: {source}")]
    WriteLog {
        /// Destination log path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The trace artifact could not be moved into the logs directory.
    #[error("failed to move trace output to {path}: {source}")]
    MoveTrace {
        /// Destination trace path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Any fatal error a whole run can end with.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A configuration problem.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An execution problem.
    #[error(transparent)]
    Exec(#[from] ExecError),

    /// The corpus traversal itself failed (unreadable directory, ...).
    #[error("filesystem traversal failed: {0}")]
    Walk(#[from] walkdir::Error),
}
