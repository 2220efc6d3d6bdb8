//! Per-test execution and result capture.
//!
//! Runs one eligible ELF test through the two-stage pipeline:
//! 1. **Convert:** `elf_to_hex <elf> Mem.hex` writes the memory image into the working directory.
//! 2. **Simulate:** `<sim> +tohost [+v1|+v2]` loads the image from the working directory and self-reports the result via the tohost protocol.
//!
//! Both stages run synchronously to completion; stage 2 runs regardless of
//! stage 1's exit status. Pass/fail is decided purely by searching stage 2's
//! combined stdout/stderr for the `PASS` marker (exit codes are never
//! consulted; the simulator's contract is defined by printed markers). Each
//! test leaves a log of both stages' output, plus the relocated trace
//! artifact when the simulator produced one.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::str::FromStr;

use tracing::debug;

use crate::common::{ConfigError, ExecError};
use crate::config::HarnessConfig;

/// Marker whose presence in stage-2 output means the test passed.
const PASS_MARKER: &str = "PASS";

/// Simulator trace verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// No extra trace flag passed to the simulator.
    #[default]
    Quiet,
    /// `+v1`: print an instruction trace during simulation.
    Instruction,
    /// `+v2`: print pipeline stage state during simulation.
    Pipeline,
}

impl Verbosity {
    /// The flag to append to the simulator command line, if any.
    const fn sim_flag(self) -> Option<&'static str> {
        match self {
            Self::Quiet => None,
            Self::Instruction => Some("+v1"),
            Self::Pipeline => Some("+v2"),
        }
    }
}

impl FromStr for Verbosity {
    type Err = ConfigError;

    /// Parses the optional command-line verbosity value (`v1` or `v2`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "v1" => Ok(Self::Instruction),
            "v2" => Ok(Self::Pipeline),
            other => Err(ConfigError::UnknownVerbosity(other.to_string())),
        }
    }
}

/// Result of one executed test.
#[derive(Debug)]
pub struct TestOutcome {
    /// Whether stage-2 output contained the pass marker.
    pub passed: bool,
    /// Path of the persisted log.
    pub log_path: PathBuf,
    /// Path the trace artifact was moved to, when the simulator produced one.
    pub trace_path: Option<PathBuf>,
}

/// Runs eligible tests through the convert-then-simulate pipeline.
///
/// The working directory is where the pipeline's side-channel artifacts
/// (memory image, trace output) live; both stages execute with it as their
/// current directory. Execution is strictly sequential, so a single working
/// directory sees at most one in-flight test at a time.
#[derive(Debug)]
pub struct Executor {
    sim_path: PathBuf,
    elf_to_hex: PathBuf,
    logs_dir: PathBuf,
    work_dir: PathBuf,
    verbosity: Verbosity,
    mem_image: String,
    trace_file: String,
}

impl Executor {
    /// Creates an executor for one run.
    pub fn new(
        config: &HarnessConfig,
        sim_path: &Path,
        logs_dir: &Path,
        work_dir: &Path,
        verbosity: Verbosity,
    ) -> Self {
        Self {
            sim_path: sim_path.to_path_buf(),
            elf_to_hex: config.elf_to_hex.clone(),
            logs_dir: logs_dir.to_path_buf(),
            work_dir: work_dir.to_path_buf(),
            verbosity,
            mem_image: config.mem_image.clone(),
            trace_file: config.trace_file.clone(),
        }
    }

    /// Runs one test and persists its artifacts.
    ///
    /// Prints the per-test progress lines (test name, the two command lines,
    /// `PASS`/`FAIL`, log destination) to stdout as the run proceeds.
    ///
    /// # Errors
    ///
    /// Returns `ExecError` when a stage cannot be launched or an artifact
    /// cannot be persisted. A stage that launches and exits non-zero is a
    /// completed stage, not an error.
    pub fn run_test(&self, elf_path: &Path) -> Result<TestOutcome, ExecError> {
        let basename = elf_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| elf_path.display().to_string());

        let convert = vec![
            self.elf_to_hex.clone().into_os_string(),
            elf_path.as_os_str().to_os_string(),
            OsString::from(&self.mem_image),
        ];
        let mut simulate = vec![
            self.sim_path.clone().into_os_string(),
            OsString::from("+tohost"),
        ];
        if let Some(flag) = self.verbosity.sim_flag() {
            simulate.push(OsString::from(flag));
        }

        println!("Test {}", basename);
        print_command(&convert);
        print_command(&simulate);

        let convert_output = self.run_stage("elf_to_hex", &convert)?;
        let simulate_output = self.run_stage("simulator", &simulate)?;

        let passed = simulate_output.contains(PASS_MARKER);
        if passed {
            print!("    PASS");
        } else {
            print!("    FAIL");
        }

        let log_path = self.logs_dir.join(format!("{basename}.log"));
        println!("      Writing log: {basename}.log");

        let mut log_text = convert_output;
        log_text.push_str(&simulate_output);
        fs::write(&log_path, log_text).map_err(|source| ExecError::WriteLog {
            path: log_path.clone(),
            source,
        })?;

        let trace_path = self.save_trace(&basename)?;

        Ok(TestOutcome {
            passed,
            log_path,
            trace_path,
        })
    }

    /// Runs one pipeline stage to completion, capturing combined output.
    fn run_stage(&self, stage: &'static str, argv: &[OsString]) -> Result<String, ExecError> {
        debug!(stage, program = %argv[0].to_string_lossy(), "running pipeline stage");
        let output = Command::new(&argv[0])
            .args(&argv[1..])
            .current_dir(&self.work_dir)
            .output()
            .map_err(|source| ExecError::Spawn {
                stage,
                program: argv[0].to_string_lossy().into_owned(),
                source,
            })?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(text)
    }

    /// Moves the trace artifact next to the test's log, when one was produced.
    ///
    /// The simulator drops the trace under a fixed well-known name in the
    /// working directory rather than reporting a path, so its existence after
    /// stage 2 is the only signal.
    fn save_trace(&self, basename: &str) -> Result<Option<PathBuf>, ExecError> {
        let source_path = self.work_dir.join(&self.trace_file);
        if !source_path.exists() {
            return Ok(None);
        }

        let trace_path = self.logs_dir.join(format!("{basename}.trace_data"));
        fs::rename(&source_path, &trace_path).map_err(|source| ExecError::MoveTrace {
            path: trace_path.clone(),
            source,
        })?;
        debug!(from = %source_path.display(), to = %trace_path.display(), "relocated trace artifact");
        println!("    Trace output saved in: {}", trace_path.display());
        Ok(Some(trace_path))
    }
}

/// Prints one `    Exec: <argv...>` progress line.
fn print_command(argv: &[OsString]) {
    let mut line = String::from("    Exec:");
    for arg in argv {
        line.push(' ');
        line.push_str(&arg.to_string_lossy());
    }
    println!("{line}");
}
