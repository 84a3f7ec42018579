//! Reading and parsing of configuration documents.
//!
//! Responsibilities:
//! - Read a YAML document from disk and parse it into a `Value`.
//! - Map I/O and parser failures to `ConfigError` with the offending path.
//!
//! Invariants:
//! - An empty or all-comment file parses to an empty mapping, never null.
//! - Files are only ever read, never written.

use std::io::ErrorKind;
use std::path::Path;

use serde_yaml::{Mapping, Value};

use super::error::ConfigError;

/// Read and parse a single configuration document.
pub(super) fn read_config_file(path: &Path) -> Result<Value, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let document: Value = serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    // YAML parses an empty document to null.
    Ok(match document {
        Value::Null => Value::Mapping(Mapping::new()),
        document => document,
    })
}
