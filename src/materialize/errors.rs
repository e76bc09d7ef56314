//! Row materialization errors.

use thiserror::Error;

use crate::result_set::CellError;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MaterializeError {
    /// The row is narrower than the ordinal a column resolved to; the
    /// driver handed over rows that do not match the schema it reported.
    #[error("column `{column}` at ordinal {ordinal} is outside the row (width {width})")]
    OrdinalOutOfRange {
        column: String,
        ordinal: usize,
        width: usize,
    },

    /// A cell could not be converted into the field backing `column`.
    #[error("cannot assign column `{column}` on `{target}`: {source}")]
    TypeMismatch {
        target: String,
        column: String,
        #[source]
        source: CellError,
    },
}
