//! Centralized constants for the configuration crate.
//!
//! This module contains default values used by the loader to avoid
//! magic string duplication and improve maintainability.

/// Default directory searched for configuration documents.
pub const DEFAULT_CONFIG_DIR: &str = "config";

/// Subdirectory of the config directory holding per-environment overrides.
pub const ENVIRONMENTS_DIR: &str = "environments";

/// File extension of configuration documents.
pub const CONFIG_FILE_EXTENSION: &str = "yaml";
