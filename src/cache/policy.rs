//! Expiration policies for cached result collections.

use chrono::Duration;

use super::errors::CacheError;

/// How long a cached collection stays valid.
///
/// At most one of `absolute_expiration`, `sliding_expiration` and
/// `infinite_expiration = true` may be set; contradictory combinations are
/// rejected when the policy is registered, never at use time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CachePolicy {
    /// Entry is dropped this long after it was stored.
    pub absolute_expiration: Option<Duration>,
    /// Entry is dropped this long after it was last read.
    pub sliding_expiration: Option<Duration>,
    /// Entry never expires.
    pub infinite_expiration: bool,
}

impl CachePolicy {
    /// The built-in fallback when no policy matches a key.
    pub fn infinite() -> Self {
        CachePolicy {
            infinite_expiration: true,
            ..CachePolicy::default()
        }
    }

    pub fn absolute(duration: Duration) -> Self {
        CachePolicy {
            absolute_expiration: Some(duration),
            ..CachePolicy::default()
        }
    }

    pub fn sliding(duration: Duration) -> Self {
        CachePolicy {
            sliding_expiration: Some(duration),
            ..CachePolicy::default()
        }
    }

    pub(crate) fn validate(&self) -> Result<(), CacheError> {
        if self.absolute_expiration.is_some() && self.sliding_expiration.is_some() {
            return Err(CacheError::InvalidPolicy {
                reason: "absolute_expiration and sliding_expiration can't both be set; \
                         set one or the other"
                    .to_string(),
            });
        }

        if self.sliding_expiration.is_some() && self.infinite_expiration {
            return Err(CacheError::InvalidPolicy {
                reason: "sliding_expiration can't be set if infinite_expiration is true"
                    .to_string(),
            });
        }

        if self.infinite_expiration && self.absolute_expiration.is_some() {
            return Err(CacheError::InvalidPolicy {
                reason: "expiration can't be infinite if absolute_expiration is set".to_string(),
            });
        }

        Ok(())
    }
}
