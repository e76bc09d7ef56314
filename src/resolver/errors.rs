//! Partition and validation errors.
//!
//! Every kind here is a caller configuration mistake surfaced before any
//! row is materialized; none is transient and none is retried.

use thiserror::Error;

/// Select columns a single target type expected but could not resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmappedColumns {
    pub target: String,
    pub columns: Vec<String>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// Multi-entity query without explicit partition markers. Column names
    /// legitimately repeat across joined entities, so boundary inference
    /// is unsafe and the caller must declare where each entity begins.
    #[error(
        "query `{query}` maps {targets} target types but no partition markers were supplied; \
         declare the first column of each entity after the first"
    )]
    AmbiguousPartition { targets: usize, query: String },

    /// Marker count does not match the declared target types (N targets
    /// need N-1 markers).
    #[error(
        "query `{query}` maps {targets} target types and needs {expected} partition markers, \
         got {actual}"
    )]
    PartitionCount {
        targets: usize,
        expected: usize,
        actual: usize,
        query: String,
    },

    /// A partition marker was not found at or after its expected scan
    /// position.
    #[error(
        "partition marker `{marker}` was not found at or after column {scan_from} \
         in the result columns of `{query}`"
    )]
    InvalidPartition {
        marker: String,
        scan_from: usize,
        query: String,
    },

    /// The result shape does not satisfy the declared mapping: either a
    /// structural mismatch (an entity's segment holds no columns), or,
    /// under strict validation, expected select columns that never
    /// resolved. `unmapped` is empty for structural failures.
    #[error("{message}")]
    SchemaValidation {
        message: String,
        unmapped: Vec<UnmappedColumns>,
    },
}
