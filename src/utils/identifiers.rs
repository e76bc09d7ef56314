//! Column-name sanitization for schema-less result rows.
//!
//! Ad-hoc queries surface raw select-column names ("Assistant First Name",
//! "count()") as the keys of a dynamic row. Keys are normalized to valid
//! identifiers so downstream consumers can treat them as field names;
//! values are never touched.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Characters outside [A-Za-z0-9_] are replaced during sanitization.
    static ref NON_IDENT: Regex = Regex::new(r"[^A-Za-z0-9_]").unwrap();
}

/// Normalize a raw column name into a valid identifier.
///
/// Invalid characters become `_`, a leading digit gets a `_` prefix, and a
/// blank name falls back to `column{ordinal}`.
pub fn sanitize_identifier(raw: &str, ordinal: usize) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return format!("column{ordinal}");
    }

    let mut name = NON_IDENT.replace_all(trimmed, "_").into_owned();
    if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}
