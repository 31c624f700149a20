//! Cache Entry Module
//!
//! Defines a single cached response together with the time it was stored.

use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

// == Cache Entry ==
/// A normalized response held by the cache.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored JSON value
    pub value: Value,
    /// Storage timestamp (Unix milliseconds)
    pub stored_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(value: Value) -> Self {
        Self {
            value,
            stored_at: current_timestamp_ms(),
        }
    }

    // == Freshness ==
    /// Returns true while the entry is younger than `ttl_ms`.
    pub fn is_fresh(&self, ttl_ms: u64) -> bool {
        self.is_fresh_at(current_timestamp_ms(), ttl_ms)
    }

    /// Freshness check against an explicit clock reading.
    ///
    /// Boundary condition: an entry whose age equals the TTL is stale, so a
    /// zero TTL disables caching entirely.
    pub fn is_fresh_at(&self, now_ms: u64, ttl_ms: u64) -> bool {
        now_ms.saturating_sub(self.stored_at) < ttl_ms
    }

    // == Age ==
    /// Milliseconds elapsed since the entry was stored.
    pub fn age_ms(&self) -> u64 {
        current_timestamp_ms().saturating_sub(self.stored_at)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
