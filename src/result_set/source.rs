//! Driver-facing row cursor.

use std::collections::VecDeque;

use serde_json::Value;

#[cfg(test)]
use mockall::automock;

/// Forward-only row cursor produced by the driver collaborator.
///
/// The column-name list is available before iteration begins; each row is a
/// positional value vector the driver has already materialized into memory.
/// The cursor never rewinds, so a mapping run consumes it exactly once.
#[cfg_attr(test, automock)]
pub trait RowSource {
    /// Ordered column names of the active result set.
    fn columns(&self) -> Vec<String>;

    /// Advance the cursor; `None` once the result set is exhausted.
    fn next_row(&mut self) -> Option<Vec<Value>>;
}

/// In-memory [`RowSource`], for tests and for callers that buffer rows
/// before mapping.
#[derive(Debug, Clone, Default)]
pub struct MemoryRows {
    columns: Vec<String>,
    rows: VecDeque<Vec<Value>>,
}

impl MemoryRows {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MemoryRows {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: VecDeque::new(),
        }
    }

    pub fn push_row(mut self, row: Vec<Value>) -> Self {
        self.rows.push_back(row);
        self
    }

    pub fn remaining(&self) -> usize {
        self.rows.len()
    }
}

impl RowSource for MemoryRows {
    fn columns(&self) -> Vec<String> {
        self.columns.clone()
    }

    fn next_row(&mut self) -> Option<Vec<Value>> {
        self.rows.pop_front()
    }
}
