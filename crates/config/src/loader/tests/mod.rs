//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test document loading, environment override merging, placeholder
//!   substitution, caching, and the error contract.
//!
//! Invariants:
//! - Tests touching the process environment use `serial_test` plus
//!   `env_lock()` to prevent environment variable pollution.
//! - Temporary config directories are cleaned up automatically via
//!   `tempfile`.

use std::fs;
use std::path::Path;
use std::sync::Mutex;

use serde_yaml::Value;
use tempfile::TempDir;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Parse a YAML literal into a `Value`.
pub fn yaml(input: &str) -> Value {
    serde_yaml::from_str(input).unwrap()
}

/// Write a base configuration document under the config root.
pub fn write_config(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(format!("{name}.yaml")), contents).unwrap();
}

/// Write an environment override document under `environments/`.
pub fn write_override(dir: &Path, environment: &str, contents: &str) {
    let env_dir = dir.join("environments");
    fs::create_dir_all(&env_dir).unwrap();
    fs::write(env_dir.join(format!("{environment}.yaml")), contents).unwrap();
}

/// Create a temporary config root holding a single base document.
pub fn config_dir_with(name: &str, contents: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), name, contents);
    dir
}
