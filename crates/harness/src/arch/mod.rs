//! Architecture inference from the simulator pathname.
//!
//! This module recovers the architecture a simulator build implements from a
//! naming convention embedded in its path. It provides:
//! 1. **`ArchSpec`:** Base width plus the enabled extension letters, derived once per run and immutable thereafter.
//! 2. **`extract_arch`:** The lexical scan that finds `RV32`/`RV64` in a path and consumes the extension letters that follow.
//!
//! Matching is purely lexical on the uppercased path: a directory that happens
//! to contain `RV32` will be interpreted as the architecture. That is the
//! contract of the naming convention, not a defect to correct.

/// ISA test family selection from an architecture.
pub mod families;

use std::fmt;

use crate::common::ConfigError;

pub use families::{TestFamily, select_test_families};

/// Base integer register width of an architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseWidth {
    /// 32-bit base integer ISA (`RV32`).
    Rv32,
    /// 64-bit base integer ISA (`RV64`).
    Rv64,
}

impl BaseWidth {
    /// Register width in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Rv32 => 32,
            Self::Rv64 => 64,
        }
    }
}

/// An architecture recovered from a simulator path.
///
/// Holds the base width and the uppercase extension letters that followed the
/// `RV32`/`RV64` marker (e.g. `AIMSU`). The canonical tag form is rendered by
/// the `Display` impl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchSpec {
    /// Base integer register width.
    pub width: BaseWidth,
    /// Uppercase extension letters, in the order they appeared in the path.
    pub extensions: String,
}

impl ArchSpec {
    /// Creates an architecture from a width and extension letters.
    ///
    /// Extension letters are normalized to uppercase.
    pub fn new(width: BaseWidth, extensions: &str) -> Self {
        Self {
            width,
            extensions: extensions.to_ascii_uppercase(),
        }
    }

    /// Whether the architecture enables the given extension letter.
    ///
    /// Comparison is case-insensitive.
    pub fn has_extension(&self, letter: char) -> bool {
        self.extensions
            .chars()
            .any(|c| c.eq_ignore_ascii_case(&letter))
    }
}

impl fmt::Display for ArchSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base = match self.width {
            BaseWidth::Rv32 => "RV32",
            BaseWidth::Rv64 => "RV64",
        };
        write!(f, "{}{}", base, self.extensions)
    }
}

/// Extracts the architecture from a simulator path.
///
/// The path is uppercased, then scanned for the first occurrence of `RV32`
/// (or, failing that, `RV64`). The uppercase ASCII letters immediately
/// following the 4-character base are the extension letters; the scan stops at
/// the first non-letter (digit, path separator, end of string).
///
/// # Errors
///
/// Returns `ConfigError::NoArchMarker` when neither marker occurs in the
/// path. This is fatal for a run: without the architecture the harness cannot
/// know which tests apply.
pub fn extract_arch(sim_path: &str) -> Result<ArchSpec, ConfigError> {
    let upper = sim_path.to_ascii_uppercase();

    let (width, base_idx) = if let Some(idx) = upper.find("RV32") {
        (BaseWidth::Rv32, idx)
    } else if let Some(idx) = upper.find("RV64") {
        (BaseWidth::Rv64, idx)
    } else {
        return Err(ConfigError::NoArchMarker(sim_path.to_string()));
    };

    let extensions: String = upper[base_idx + 4..]
        .chars()
        .take_while(char::is_ascii_uppercase)
        .collect();

    Ok(ArchSpec { width, extensions })
}
