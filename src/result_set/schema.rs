//! Ordered column names describing one result shape.

use serde::{Deserialize, Serialize};

/// The schema of a single result set: its column names in select order.
///
/// Column-name lookups are case-insensitive, matching how drivers report
/// select columns. A schema is only meaningful for the execution it was
/// read from; a structurally different query needs a fresh one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSchema {
    columns: Vec<String>,
}

impl ResultSchema {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ResultSchema {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// First column at or after `from` whose name matches case-insensitively.
    pub fn position_from(&self, from: usize, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, column)| column.eq_ignore_ascii_case(name))
            .map(|(ordinal, _)| ordinal)
    }

    /// First case-insensitive match within `[start, end)`, as an absolute
    /// ordinal.
    pub fn position_within(&self, start: usize, end: usize, name: &str) -> Option<usize> {
        let end = end.min(self.columns.len());
        if start >= end {
            return None;
        }
        self.columns[start..end]
            .iter()
            .position(|column| column.eq_ignore_ascii_case(name))
            .map(|offset| start + offset)
    }
}
