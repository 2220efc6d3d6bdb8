//! Configuration system for the regression harness.
//!
//! This module defines the knobs that parameterize a run beyond its
//! command-line arguments. It provides:
//! 1. **Defaults:** The well-known converter path, artifact filenames, and traversal depth cap.
//! 2. **Structure:** A flat `HarnessConfig` with per-field serde defaults.
//!
//! Configuration is supplied via JSON when the harness is embedded; the CLI
//! uses `HarnessConfig::default()`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::common::ConfigError;

/// Default configuration constants for the harness.
///
/// These values reflect the conventions of the simulator build tree and are
/// used when not explicitly overridden in a JSON configuration.
mod defaults {
    /// Path of the ELF-to-hex converter relative to the invocation directory.
    ///
    /// The converter turns each ELF test binary into a memory image the
    /// simulator can load.
    pub const ELF_TO_HEX: &str = "./elf_to_hex/elf_to_hex";

    /// Filename of the intermediate memory image written by the converter.
    ///
    /// The simulator reads this fixed name from its working directory; the
    /// name is a contract between the two executables, not passed on either
    /// command line beyond stage 1.
    pub const MEM_IMAGE: &str = "Mem.hex";

    /// Filename of the optional tandem-verification trace.
    ///
    /// Produced by the simulator in its working directory when tracing is
    /// active; relocated next to the test's log after each run.
    pub const TRACE_FILE: &str = "trace_out.dat";

    /// Maximum directory depth visited below the corpus root.
    ///
    /// Guards against pathological trees; the root is depth 0.
    pub const MAX_DEPTH: usize = 20;
}

/// Harness configuration.
///
/// All fields have defaults, so `{}` is a valid JSON configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct HarnessConfig {
    /// Path of the ELF-to-hex converter executable.
    #[serde(default = "HarnessConfig::default_elf_to_hex")]
    pub elf_to_hex: PathBuf,

    /// Name of the intermediate memory image in the working directory.
    #[serde(default = "HarnessConfig::default_mem_image")]
    pub mem_image: String,

    /// Name of the optional trace artifact in the working directory.
    #[serde(default = "HarnessConfig::default_trace_file")]
    pub trace_file: String,

    /// Maximum traversal depth below the corpus root.
    #[serde(default = "HarnessConfig::default_max_depth")]
    pub max_depth: usize,
}

impl HarnessConfig {
    /// Returns the default converter path.
    fn default_elf_to_hex() -> PathBuf {
        PathBuf::from(defaults::ELF_TO_HEX)
    }

    /// Returns the default memory image filename.
    fn default_mem_image() -> String {
        defaults::MEM_IMAGE.to_string()
    }

    /// Returns the default trace artifact filename.
    fn default_trace_file() -> String {
        defaults::TRACE_FILE.to_string()
    }

    /// Returns the default traversal depth cap.
    fn default_max_depth() -> usize {
        defaults::MAX_DEPTH
    }

    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseConfig` if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadConfig` if the file cannot be read and
    /// `ConfigError::ParseConfig` if its contents are malformed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            elf_to_hex: PathBuf::from(defaults::ELF_TO_HEX),
            mem_image: defaults::MEM_IMAGE.to_string(),
            trace_file: defaults::TRACE_FILE.to_string(),
            max_depth: defaults::MAX_DEPTH,
        }
    }
}
