//! Cache Store Module
//!
//! The `ResponseCache` seam and its in-process implementation.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, Lookup};

// == Response Cache Trait ==
/// Storage for normalized upstream responses.
///
/// Implementations decide where entries live; callers only rely on
/// `get` returning values younger than the configured TTL and `put`
/// replacing whatever was stored under the key.
#[async_trait]
pub trait ResponseCache: Send + Sync {
    /// Returns the fresh value for `key`, if any.
    async fn get(&self, key: &str) -> Option<Value>;

    /// Stores `value` under `key`, replacing any previous entry.
    async fn put(&self, key: String, value: Value);

    /// Snapshot of hit/miss counters.
    async fn stats(&self) -> CacheStats;
}

// == Cache Store ==
/// Key-value storage with lazy TTL checks.
///
/// Expired entries are never swept; they are reported as absent and
/// overwritten on the next `put` for the same key.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
    /// Time-to-live in milliseconds
    ttl_ms: u64,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl_ms: ttl.as_millis() as u64,
        }
    }

    // == Put ==
    /// Stores a value, replacing any entry already held under `key`.
    pub fn put(&mut self, key: String, value: Value) {
        self.entries.insert(key, CacheEntry::new(value));
    }

    // == Get ==
    /// Retrieves a value if present and still fresh.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        let (lookup, value) = match self.entries.get(key) {
            Some(entry) if entry.is_fresh(self.ttl_ms) => {
                debug!("Cache hit for: {} (age {}ms)", key, entry.age_ms());
                (Lookup::Hit, Some(entry.value.clone()))
            }
            Some(entry) => {
                debug!("Cache entry for {} expired after {}ms", key, entry.age_ms());
                (Lookup::Expired, None)
            }
            None => {
                debug!("Cache miss for: {}", key);
                (Lookup::Miss, None)
            }
        };
        self.stats.record(lookup);
        value
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.with_entries(self.entries.len())
    }

    /// Number of entries held, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Memory Cache ==
/// Process-local `ResponseCache` backed by a `CacheStore`.
///
/// Concurrent misses for one key may both fetch upstream and both write;
/// the last write wins.
#[derive(Debug)]
pub struct MemoryCache {
    store: RwLock<CacheStore>,
}

impl MemoryCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            store: RwLock::new(CacheStore::new(ttl)),
        }
    }
}

#[async_trait]
impl ResponseCache for MemoryCache {
    async fn get(&self, key: &str) -> Option<Value> {
        // Write lock: lookups update the hit/miss counters
        self.store.write().await.get(key)
    }

    async fn put(&self, key: String, value: Value) {
        let mut store = self.store.write().await;
        store.put(key, value);
    }

    async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }
}
