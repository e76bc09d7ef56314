//! Descriptor construction and registration errors.
//!
//! All of these indicate a caller configuration mistake. They surface at
//! build/registration time, before any row is read, and are never retried.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EntityMapError {
    /// Two properties of one type resolve to the same result-column name,
    /// either directly or through a custom alias.
    #[error("duplicate column mapping on `{target}`: two properties resolve to `{column}`")]
    DuplicateAlias { target: String, column: String },

    /// A custom alias on one type collides with a column another registered
    /// type already resolves to.
    #[error(
        "custom alias `{column}` on `{target}` collides with a column already mapped by `{other}`"
    )]
    AliasTaken {
        target: String,
        column: String,
        other: String,
    },

    /// An alias, ignore or default names a column the entity does not
    /// declare.
    #[error("`{target}` does not declare a column named `{column}`")]
    UnknownColumn { target: String, column: String },
}
