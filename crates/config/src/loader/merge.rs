//! Deep merge of configuration documents.
//!
//! Responsibilities:
//! - Combine a base document with an override document, override wins.
//!
//! Invariants:
//! - Pure: neither input is mutated; a new document is returned.
//! - Nested mappings merge recursively; sequences and scalars are replaced
//!   wholesale, never concatenated or element-merged.
//! - Keys present only in the base are retained unchanged.

use serde_yaml::Value;

/// Deep-merge `overrides` over `base`.
///
/// When both sides hold a mapping the merge recurses per key; any other
/// combination resolves to a clone of the override value.
pub(super) fn deep_merge(base: &Value, overrides: &Value) -> Value {
    match (base, overrides) {
        (Value::Mapping(base), Value::Mapping(overrides)) => {
            let mut merged = base.clone();
            for (key, value) in overrides {
                let resolved = match merged.get(key) {
                    Some(existing) => deep_merge(existing, value),
                    None => value.clone(),
                };
                merged.insert(key.clone(), resolved);
            }
            Value::Mapping(merged)
        }
        (_, overrides) => overrides.clone(),
    }
}
