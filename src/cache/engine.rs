//! Policy registry plus the optional backing store.

use std::sync::{Arc, RwLock};

use log::{debug, warn};
use regex::Regex;

use super::errors::CacheError;
use super::policy::CachePolicy;
use super::store::CacheStore;

#[derive(Default)]
struct PolicyTable {
    global: Option<CachePolicy>,
    /// Custom policies in registration order; first match wins.
    custom: Vec<(Regex, CachePolicy)>,
}

/// One engine instance lives on the caller's data-access handle; there is
/// no process-wide singleton. Policy registration is mutually exclusive
/// with itself and with concurrent resolution, so readers never observe a
/// partially-updated table.
pub struct CacheEngine {
    provider: Option<Arc<dyn CacheStore>>,
    policies: RwLock<PolicyTable>,
}

impl CacheEngine {
    /// Engine with a backing store.
    pub fn new(provider: Arc<dyn CacheStore>) -> Self {
        CacheEngine {
            provider: Some(provider),
            policies: RwLock::new(PolicyTable::default()),
        }
    }

    /// Engine without a backing store: policies can still be registered,
    /// but any keyed operation fails with [`CacheError::NoProvider`].
    pub fn unconfigured() -> Self {
        CacheEngine {
            provider: None,
            policies: RwLock::new(PolicyTable::default()),
        }
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Set the policy applied to every key no custom policy matches.
    pub fn register_global_policy(&self, policy: CachePolicy) -> Result<(), CacheError> {
        policy.validate()?;
        self.policies.write().unwrap().global = Some(policy);
        Ok(())
    }

    /// Register a policy for keys matching `pattern`. Matching custom
    /// policies take precedence over the global policy, in registration
    /// order.
    pub fn register_policy(&self, pattern: &str, policy: CachePolicy) -> Result<(), CacheError> {
        policy.validate()?;
        let regex = Regex::new(pattern).map_err(|source| CacheError::InvalidKeyPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        self.policies.write().unwrap().custom.push((regex, policy));
        Ok(())
    }

    /// Effective policy for `key`: first matching custom policy in
    /// registration order, else the global policy, else infinite.
    pub fn resolve(&self, key: &str) -> CachePolicy {
        let table = self.policies.read().unwrap();

        for (pattern, policy) in &table.custom {
            if pattern.is_match(key) {
                return policy.clone();
            }
        }

        if let Some(global) = &table.global {
            return global.clone();
        }

        CachePolicy::infinite()
    }

    /// Retrieve a cached collection. `None` is a miss, including the case
    /// where the key holds rows of a different type, which is logged and
    /// treated as absent rather than an error.
    pub fn get<T: Send + Sync + 'static>(
        &self,
        key: &str,
    ) -> Result<Option<Arc<Vec<T>>>, CacheError> {
        let provider = self.provider()?;
        match provider.get(key) {
            Some(rows) => match rows.downcast::<Vec<T>>() {
                Ok(rows) => {
                    debug!("cache hit for key `{key}`");
                    Ok(Some(rows))
                }
                Err(_) => {
                    warn!("cache entry for key `{key}` holds a different row type; treating as a miss");
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    /// Store a collection under `key` with the policy [`resolve`](Self::resolve)
    /// picks for it.
    pub fn put<T: Send + Sync + 'static>(
        &self,
        key: &str,
        rows: Arc<Vec<T>>,
    ) -> Result<(), CacheError> {
        let provider = self.provider()?;
        let policy = self.resolve(key);
        debug!("caching {} row(s) under key `{key}`", rows.len());
        provider.put(key, rows, &policy);
        Ok(())
    }

    /// Drop one cached key.
    pub fn invalidate(&self, key: &str) -> Result<(), CacheError> {
        self.provider()?.remove(key);
        Ok(())
    }

    /// Drop every cached entry.
    pub fn reset(&self) -> Result<(), CacheError> {
        self.provider()?.clear();
        Ok(())
    }

    fn provider(&self) -> Result<&Arc<dyn CacheStore>, CacheError> {
        self.provider.as_ref().ok_or(CacheError::NoProvider)
    }
}
