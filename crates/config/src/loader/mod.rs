//! Configuration loader with environment overrides and caching.
//!
//! Responsibilities:
//! - Load and parse YAML configuration documents from the config directory.
//! - Deep-merge optional per-environment override documents over the base.
//! - Substitute `${NAME}` environment-variable placeholders in resolved
//!   documents.
//! - Memoize fully resolved documents keyed by `(name, environment)`.
//!
//! Does NOT handle:
//! - Writing configuration back to disk.
//! - Validating document contents against a schema.
//! - Watching files for changes (callers use `reload` after known updates).
//!
//! Invariants / Assumptions:
//! - The cache only ever holds fully resolved documents: merge and
//!   substitution both complete before an entry is inserted.
//! - A failed load inserts no cache entry and leaves existing entries
//!   untouched.
//! - A missing override file is not an error; a missing base file is.

mod error;
mod file;
mod merge;
mod substitute;

#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use serde_yaml::Value;

use crate::constants::{CONFIG_FILE_EXTENSION, DEFAULT_CONFIG_DIR, ENVIRONMENTS_DIR};
use file::read_config_file;
use merge::deep_merge;
use substitute::substitute_env_vars;

pub use error::ConfigError;

/// Cache key: configuration name plus optional environment label.
///
/// Absence of an environment is `None`, a distinct key component; an
/// environment literally named `"None"` therefore cannot collide with it.
type CacheKey = (String, Option<String>);

/// Loader for YAML configuration documents with environment overrides.
///
/// Documents are resolved once per `(name, environment)` pair and served
/// from an in-memory cache afterwards. [`ConfigLoader::reload`] invalidates
/// a single entry and resolves it again from disk.
pub struct ConfigLoader {
    config_dir: PathBuf,
    cache: Mutex<HashMap<CacheKey, Value>>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a loader rooted at the default `config/` directory.
    pub fn new() -> Self {
        Self::with_config_dir(DEFAULT_CONFIG_DIR)
    }

    /// Create a loader rooted at the given directory.
    pub fn with_config_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: dir.into(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// The process-wide default loader, rooted at the default directory.
    ///
    /// Lazily initialized on first use; lives for the process duration.
    pub fn shared() -> &'static ConfigLoader {
        static SHARED: OnceLock<ConfigLoader> = OnceLock::new();
        SHARED.get_or_init(ConfigLoader::new)
    }

    /// Directory this loader reads configuration documents from.
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Load a configuration document, applying environment overrides and
    /// `${NAME}` placeholder substitution.
    ///
    /// The resolved document is memoized per `(name, environment)`:
    /// repeated calls return a clone of the cached document without any
    /// file I/O, and callers cannot reach the cache entry through the
    /// returned value.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NotFound`] if the base document for `config_name`
    ///   does not exist. A missing override file is silently skipped.
    /// - [`ConfigError::Read`] if a document exists but cannot be read.
    /// - [`ConfigError::Parse`] if a document is not valid YAML.
    pub fn load(
        &self,
        config_name: &str,
        environment: Option<&str>,
    ) -> Result<Value, ConfigError> {
        let key = cache_key(config_name, environment);
        let mut cache = self.lock_cache();

        if let Some(resolved) = cache.get(&key) {
            tracing::debug!(
                config = %config_name,
                environment = ?environment,
                "Serving configuration from cache"
            );
            return Ok(resolved.clone());
        }

        let resolved = self.resolve(config_name, environment)?;
        cache.insert(key, resolved.clone());
        Ok(resolved)
    }

    /// Drop any cached entry for `(config_name, environment)` and load the
    /// document again from disk.
    ///
    /// Use when the underlying files may have changed since the last load.
    /// Same error contract as [`ConfigLoader::load`].
    pub fn reload(
        &self,
        config_name: &str,
        environment: Option<&str>,
    ) -> Result<Value, ConfigError> {
        let key = cache_key(config_name, environment);
        let mut cache = self.lock_cache();

        if cache.remove(&key).is_some() {
            tracing::debug!(
                config = %config_name,
                environment = ?environment,
                "Invalidated cached configuration"
            );
        }

        let resolved = self.resolve(config_name, environment)?;
        cache.insert(key, resolved.clone());
        Ok(resolved)
    }

    /// Resolve a document from disk: base file, optional environment
    /// override merge, then placeholder substitution.
    fn resolve(
        &self,
        config_name: &str,
        environment: Option<&str>,
    ) -> Result<Value, ConfigError> {
        let base_path = self
            .config_dir
            .join(format!("{config_name}.{CONFIG_FILE_EXTENSION}"));
        tracing::debug!(path = %base_path.display(), "Reading base configuration");
        let mut document = read_config_file(&base_path)?;

        if let Some(environment) = environment {
            let override_path = self
                .config_dir
                .join(ENVIRONMENTS_DIR)
                .join(format!("{environment}.{CONFIG_FILE_EXTENSION}"));

            match read_config_file(&override_path) {
                Ok(overrides) => {
                    tracing::debug!(
                        path = %override_path.display(),
                        "Merging environment overrides"
                    );
                    document = deep_merge(&document, &overrides);
                }
                // The environment simply has no overrides for this document.
                Err(ConfigError::NotFound { .. }) => {
                    tracing::debug!(
                        path = %override_path.display(),
                        "No override file for environment"
                    );
                }
                Err(e) => return Err(e),
            }
        }

        Ok(substitute_env_vars(document))
    }

    /// A poisoned lock only means a previous holder panicked mid-load;
    /// entries are inserted whole, so the map itself is still consistent.
    fn lock_cache(&self) -> MutexGuard<'_, HashMap<CacheKey, Value>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn cache_key(config_name: &str, environment: Option<&str>) -> CacheKey {
    (config_name.to_string(), environment.map(str::to_string))
}
