//! Configuration management for Nudge.
//!
//! This crate provides the loader for YAML configuration documents with
//! environment-specific overrides and environment-variable substitution.

mod constants;
mod loader;

pub use loader::{ConfigError, ConfigLoader};
pub use serde_yaml::Value;
