//! Run orchestration: traversal, filtering, and execution as one pipeline.
//!
//! `Harness` owns the pieces of a run side-by-side: the architecture derived
//! from the simulator path, the test families selected from it, the
//! depth-capped walker, and the per-test executor. Control flow is a single
//! synchronous pipeline with no concurrent test runs: every regular file the
//! walker visits is filtered, and eligible files execute immediately while
//! the walk is in flight.

/// Two-stage per-test execution and result capture.
pub mod executor;
/// Eligibility filtering of visited files.
pub mod filter;
/// Depth-bounded corpus traversal.
pub mod walker;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::arch::{ArchSpec, TestFamily, extract_arch, select_test_families};
use crate::common::{ConfigError, HarnessError};
use crate::config::HarnessConfig;
use crate::stats::RunStats;

pub use executor::{Executor, TestOutcome, Verbosity};
pub use walker::Walker;

/// Top-level regression harness: selected families + walker + executor.
#[derive(Debug)]
pub struct Harness {
    arch: ArchSpec,
    families: Vec<TestFamily>,
    tests_root: PathBuf,
    walker: Walker,
    executor: Executor,
}

impl Harness {
    /// Prepares a run: validates the simulator path, derives the architecture
    /// from it, and selects the applicable test families.
    ///
    /// The derived architecture and family list are reported to stdout here,
    /// before any test runs. Both are immutable for the lifetime of the
    /// harness.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when the simulator path does not exist or
    /// carries no `RV32`/`RV64` marker.
    pub fn new(
        config: &HarnessConfig,
        sim_path: &Path,
        tests_root: &Path,
        logs_dir: &Path,
        work_dir: &Path,
        verbosity: Verbosity,
    ) -> Result<Self, ConfigError> {
        if !sim_path.exists() {
            return Err(ConfigError::SimulatorNotFound(sim_path.to_path_buf()));
        }

        let arch = extract_arch(&sim_path.to_string_lossy())?;
        println!("Architecture is: {}", arch);

        let families = select_test_families(&arch);
        println!("Testing the following families of ISA tests");
        for family in &families {
            println!("    {}", family);
        }

        let executor = Executor::new(config, sim_path, logs_dir, work_dir, verbosity);

        Ok(Self {
            arch,
            families,
            tests_root: tests_root.to_path_buf(),
            walker: Walker::new(config.max_depth),
            executor,
        })
    }

    /// The architecture derived from the simulator path.
    pub fn arch(&self) -> &ArchSpec {
        &self.arch
    }

    /// The test families selected for this run, in selection order.
    pub fn families(&self) -> &[TestFamily] {
        &self.families
    }

    /// Walks the corpus and executes every eligible test, sequentially.
    ///
    /// Returns the aggregated counters. Test failures (missing pass marker)
    /// are normal data points reflected only in the counters; they do not
    /// stop the run.
    ///
    /// # Errors
    ///
    /// Returns a `HarnessError` when the traversal fails or a test cannot be
    /// launched or persisted; the run stops at the first such error.
    pub fn run(&self) -> Result<RunStats, HarnessError> {
        let mut stats = RunStats::default();

        self.walker.walk(&self.tests_root, |path| {
            let basename = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();

            if !filter::is_eligible(&basename, &self.families) {
                debug!(file = %path.display(), "ignoring file");
                return Ok(());
            }

            let outcome = self.executor.run_test(path)?;
            stats.record(outcome.passed);
            Ok(())
        })?;

        Ok(stats)
    }
}
