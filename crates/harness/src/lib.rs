//! RISC-V ISA regression harness library.
//!
//! This crate drives a RISC-V simulation executable over the standard ISA test
//! suite and provides:
//! 1. **Architecture inference:** Recovers the implemented architecture (e.g. `RV32IMU`) from the simulator pathname.
//! 2. **Family selection:** Maps the architecture to the ISA test families (`rv32ui-p`, `rv64uf-v`, ...) that apply to it.
//! 3. **Corpus traversal:** A depth-bounded walk over the test tree, classifying every entry it visits.
//! 4. **Test execution:** A two-stage subprocess pipeline (ELF-to-hex conversion, then simulation) with output capture, `PASS` detection, and log/trace persistence.
//! 5. **Statistics:** Executed/passed counters aggregated across the run.

/// Architecture extraction and ISA test family selection.
pub mod arch;
/// Common types: the harness error taxonomy.
pub mod common;
/// Harness configuration (defaults, artifact names, traversal policy).
pub mod config;
/// Corpus traversal, test filtering, and test execution.
pub mod run;
/// Run statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `HarnessConfig::default()` or deserialize from JSON.
pub use crate::config::HarnessConfig;
/// Top-level harness; construct with `Harness::new` and drive with `Harness::run`.
pub use crate::run::Harness;
/// Executed/passed counters for a whole run.
pub use crate::stats::RunStats;
