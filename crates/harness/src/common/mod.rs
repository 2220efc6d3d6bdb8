//! Common types shared across the harness.
//!
//! This module hosts the error taxonomy used by every other module. It
//! distinguishes fatal configuration problems from fatal per-run execution
//! problems; a test that merely fails its `PASS` check is not an error and
//! never appears here.

/// Error taxonomy (configuration vs. execution failures).
pub mod error;

pub use error::{ConfigError, ExecError, HarnessError};
