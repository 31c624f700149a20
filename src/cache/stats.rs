//! Lookup counters for the response cache.

use serde::Serialize;

/// Outcome of a single cache read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// Fresh entry served
    Hit,
    /// No entry under the key
    Miss,
    /// Entry present but past its TTL; goes upstream like a miss
    Expired,
}

/// Snapshot of cache activity since startup.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    /// Every lookup that had to go upstream, expired ones included
    pub misses: u64,
    pub expired: u64,
    /// Entries held, including stale ones not yet overwritten
    pub total_entries: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, lookup: Lookup) {
        match lookup {
            Lookup::Hit => self.hits += 1,
            Lookup::Miss => self.misses += 1,
            Lookup::Expired => {
                self.expired += 1;
                self.misses += 1;
            }
        }
    }

    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    /// Fraction of lookups served from the cache, 0.0 before the first one.
    pub fn hit_rate(&self) -> f64 {
        match self.lookups() {
            0 => 0.0,
            n => self.hits as f64 / n as f64,
        }
    }

    /// Copy of these counters with the entry count filled in.
    pub fn with_entries(&self, total_entries: usize) -> Self {
        Self {
            total_entries,
            ..self.clone()
        }
    }
}
