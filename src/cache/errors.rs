//! Cache configuration errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    /// A cache key was supplied, or a cache-management operation invoked,
    /// without a registered provider. "No cache desired" is expressed by
    /// not passing a key; this is "cache desired but not wired up".
    #[error(
        "a cache key was used but no cache provider is registered; construct the data-access \
         handle with a cache store before supplying cache keys"
    )]
    NoProvider,

    /// Contradictory expiration settings. Rejected at registration; an
    /// invalid policy is never added to the registry.
    #[error("cache policy is invalid: {reason}")]
    InvalidPolicy { reason: String },

    /// The key pattern supplied with a custom policy does not compile.
    #[error("invalid cache key pattern `{pattern}`: {source}")]
    InvalidKeyPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
