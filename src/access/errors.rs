//! Facade-level error, aggregating every subsystem's kinds.

use thiserror::Error;

use crate::cache::CacheError;
use crate::entity_map::EntityMapError;
use crate::materialize::MaterializeError;
use crate::resolver::ResolveError;

#[derive(Debug, Error)]
pub enum AccessError {
    #[error(transparent)]
    EntityMap(#[from] EntityMapError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Materialize(#[from] MaterializeError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    /// The fetch arity does not match the number of mapped target types.
    #[error("query declares {actual} target type(s) but the fetch expects {expected}")]
    TargetCount { expected: usize, actual: usize },
}
