//! Environment-variable substitution in configuration documents.
//!
//! Responsibilities:
//! - Walk a document and replace `${NAME}` string scalars with the value
//!   of the corresponding process environment variable.
//!
//! Invariants:
//! - Substitution is whole-value only: a string is replaced when it is
//!   exactly `${NAME}`, never interpolated inside surrounding text.
//! - Unset variables leave the placeholder string unchanged.
//! - Mapping keys and non-string scalars pass through untouched.

use serde_yaml::Value;

/// Recursively substitute environment-variable placeholders.
pub(super) fn substitute_env_vars(document: Value) -> Value {
    match document {
        Value::Mapping(mapping) => Value::Mapping(
            mapping
                .into_iter()
                .map(|(key, value)| (key, substitute_env_vars(value)))
                .collect(),
        ),
        Value::Sequence(items) => {
            Value::Sequence(items.into_iter().map(substitute_env_vars).collect())
        }
        Value::String(scalar) => Value::String(resolve_placeholder(scalar)),
        other => other,
    }
}

/// Replace a whole-value `${NAME}` placeholder with the environment value,
/// or return the string unchanged.
fn resolve_placeholder(scalar: String) -> String {
    if !(scalar.starts_with("${") && scalar.ends_with('}')) {
        return scalar;
    }
    match std::env::var(&scalar[2..scalar.len() - 1]) {
        Ok(value) => value,
        Err(_) => scalar,
    }
}
