//! Recipe Proxy - A caching proxy in front of an external recipe API
//!
//! Forwards search, details, featured and tag requests upstream, normalizes
//! the responses into a stable contract, and caches them for a short TTL.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
