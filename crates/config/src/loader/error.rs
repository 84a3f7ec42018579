//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading failures.
//! - Carry the offending file path on every variant for diagnosis.
//!
//! Does NOT handle:
//! - Unresolved `${NAME}` placeholders (pass-through, see `substitute.rs`).
//!
//! Invariants:
//! - A missing base file is `NotFound`; a missing override file never
//!   surfaces as an error (see `mod.rs`).

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The requested base configuration file does not exist.
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// A configuration file exists but could not be read.
    #[error("Failed to read configuration file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A configuration file exists but is not valid YAML.
    #[error("Invalid YAML in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}
