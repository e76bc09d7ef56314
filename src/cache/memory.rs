//! In-memory cache store with least-recently-used eviction.
//!
//! # Configuration
//!
//! Environment variables:
//! - `ROWMAP_CACHE_ENABLED` (default: true)
//! - `ROWMAP_CACHE_MAX_ENTRIES` (default: 1000)

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use super::policy::CachePolicy;
use super::store::{CacheStore, CachedRows};

/// Cached entry with expiration state and access bookkeeping.
#[derive(Clone)]
struct CacheEntry {
    rows: CachedRows,
    /// Deadline after which the entry is dropped on read; `None` never
    /// expires.
    expires_at: Option<DateTime<Utc>>,
    /// Sliding window re-applied on every hit.
    sliding: Option<Duration>,
    /// Last access timestamp (for LRU).
    last_accessed: DateTime<Utc>,
    /// Number of times this entry was read.
    access_count: u64,
}

impl CacheEntry {
    fn new(rows: CachedRows, policy: &CachePolicy, now: DateTime<Utc>) -> Self {
        let (expires_at, sliding) = if let Some(window) = policy.sliding_expiration {
            (Some(now + window), Some(window))
        } else if let Some(ttl) = policy.absolute_expiration {
            (Some(now + ttl), None)
        } else {
            // Infinite policy, or the empty default.
            (None, None)
        };

        CacheEntry {
            rows,
            expires_at,
            sliding,
            last_accessed: now,
            access_count: 0,
        }
    }

    fn expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|deadline| deadline <= now)
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.last_accessed = now;
        self.access_count += 1;
        if let Some(window) = self.sliding {
            self.expires_at = Some(now + window);
        }
    }
}

/// Configuration for the in-memory store.
#[derive(Debug, Clone)]
pub struct MemoryCacheConfig {
    /// Enable or disable caching.
    pub enabled: bool,
    /// Maximum number of entries (LRU eviction).
    pub max_entries: usize,
}

impl Default for MemoryCacheConfig {
    fn default() -> Self {
        MemoryCacheConfig {
            enabled: true,
            max_entries: 1000,
        }
    }
}

impl MemoryCacheConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let enabled = std::env::var("ROWMAP_CACHE_ENABLED")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(true);

        let max_entries = std::env::var("ROWMAP_CACHE_MAX_ENTRIES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1000);

        MemoryCacheConfig {
            enabled,
            max_entries,
        }
    }
}

/// In-memory [`CacheStore`] with lazy expiration and LRU eviction.
pub struct MemoryCacheStore {
    entries: Mutex<HashMap<String, CacheEntry>>,
    config: MemoryCacheConfig,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl MemoryCacheStore {
    pub fn new(config: MemoryCacheConfig) -> Self {
        MemoryCacheStore {
            entries: Mutex::new(HashMap::new()),
            config,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(MemoryCacheConfig::default())
    }

    pub fn from_env() -> Self {
        Self::new(MemoryCacheConfig::from_env())
    }

    /// Snapshot of the store's counters.
    pub fn metrics(&self) -> CacheMetrics {
        let entries = self.entries.lock().unwrap();
        CacheMetrics {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            size: entries.len(),
            max_entries: self.config.max_entries,
        }
    }

    /// Evict the least recently used entry.
    fn evict_lru(&self, entries: &mut HashMap<String, CacheEntry>) {
        if let Some((key, _)) = entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_accessed)
        {
            let key = key.clone();
            entries.remove(&key);
            self.evictions.fetch_add(1, Ordering::Relaxed);
        }
    }
}

impl CacheStore for MemoryCacheStore {
    fn get(&self, key: &str) -> Option<CachedRows> {
        if !self.config.enabled {
            return None;
        }

        let now = Utc::now();
        let mut entries = self.entries.lock().unwrap();

        let expired = match entries.get(key) {
            Some(entry) => entry.expired(now),
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                return None;
            }
        };

        if expired {
            entries.remove(key);
            self.misses.fetch_add(1, Ordering::Relaxed);
            return None;
        }

        let entry = entries.get_mut(key)?;
        entry.touch(now);
        self.hits.fetch_add(1, Ordering::Relaxed);
        Some(entry.rows.clone())
    }

    fn put(&self, key: &str, rows: CachedRows, policy: &CachePolicy) {
        if !self.config.enabled {
            return;
        }

        let now = Utc::now();
        let mut entries = self.entries.lock().unwrap();

        if !entries.contains_key(key) && entries.len() >= self.config.max_entries {
            self.evict_lru(&mut entries);
        }

        entries.insert(key.to_string(), CacheEntry::new(rows, policy, now));
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.lock().unwrap();
        entries.remove(key);
    }

    fn clear(&self) {
        let mut entries = self.entries.lock().unwrap();
        entries.clear();
    }
}

/// Cache counters for monitoring.
#[derive(Debug, Clone, Serialize)]
pub struct CacheMetrics {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub size: usize,
    pub max_entries: usize,
}

impl CacheMetrics {
    /// Cache hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
