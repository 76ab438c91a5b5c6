//! Helpers for reading ids out of `create` results.
//!
//! The API answers `create` with `{"<name>ids": ["10084", ...]}`, ids encoded
//! as strings.

use serde_json::Value;

use crate::kind::ObjectKind;

/// Ids reported by a `create` call on `kind`. Entries that are not numeric are
/// skipped.
#[must_use]
pub fn created_ids(result: &Value, kind: ObjectKind) -> Vec<u64> {
    let Some(ids) = result.get(kind.id_field()).and_then(Value::as_array) else {
        return Vec::new();
    };

    ids.iter()
        .filter_map(|id| match id {
            Value::String(s) => s.parse().ok(),
            Value::Number(n) => n.as_u64(),
            _ => None,
        })
        .collect()
}

#[must_use]
pub fn first_created_id(result: &Value, kind: ObjectKind) -> Option<u64> {
    created_ids(result, kind).into_iter().next()
}
