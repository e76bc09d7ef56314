//! Schema-less row materialization for ad-hoc queries.
//!
//! No descriptor, no partitioning: every result column becomes a key of an
//! order-preserving name → value association. Keys are sanitized into
//! valid identifiers; values are passed through exactly as the driver
//! produced them.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::result_set::ResultSchema;
use crate::utils::sanitize_identifier;

/// One schema-less row: insertion-ordered column name → raw value.
pub type DynamicRow = Map<String, Value>;

/// Ordinal → sanitized key for one dynamic result shape. Computed once per
/// query, reused for every row.
///
/// Names that sanitize to the same identifier are disambiguated with an
/// ordinal suffix so no cell is silently dropped.
pub fn dynamic_columns(schema: &ResultSchema) -> Vec<(usize, String)> {
    let mut seen: HashSet<String> = HashSet::new();
    schema
        .names()
        .iter()
        .enumerate()
        .map(|(ordinal, raw)| {
            let mut name = sanitize_identifier(raw, ordinal);
            if !seen.insert(name.to_ascii_lowercase()) {
                name = format!("{name}_{ordinal}");
                seen.insert(name.to_ascii_lowercase());
            }
            (ordinal, name)
        })
        .collect()
}

/// Build the name → value association for one row. A row shorter than the
/// schema yields explicit nulls for the missing tail.
pub fn materialize_dynamic(columns: &[(usize, String)], row: &[Value]) -> DynamicRow {
    let mut object = Map::with_capacity(columns.len());
    for (ordinal, name) in columns {
        let value = row.get(*ordinal).cloned().unwrap_or(Value::Null);
        object.insert(name.clone(), value);
    }
    object
}
