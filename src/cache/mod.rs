//! Cache Module
//!
//! Time-bounded storage for normalized upstream responses.

mod entry;
mod key;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use key::CacheKey;
pub use stats::{CacheStats, Lookup};
pub use store::{CacheStore, MemoryCache, ResponseCache};

// == Public Constants ==
/// Default time-to-live for cached responses (5 minutes)
pub const DEFAULT_TTL_MS: u64 = 300_000;
