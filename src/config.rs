//! Configuration Module
//!
//! Handles loading and managing proxy configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default upstream host identifier sent with every request.
pub const DEFAULT_UPSTREAM_HOST: &str = "tasty.p.rapidapi.com";

/// Default upstream base URL.
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://tasty.p.rapidapi.com";

/// Proxy configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream API key; requests fail with 500 while this is unset
    pub api_key: Option<String>,
    /// Value of the upstream host header
    pub upstream_host: String,
    /// Base URL every upstream path is appended to
    pub upstream_base_url: String,
    /// Cache time-to-live in milliseconds
    pub cache_ttl_ms: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Upstream request timeout in seconds, 0 disables it
    pub upstream_timeout_secs: u64,
    /// Retries on transient upstream failures
    pub upstream_max_retries: u32,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `RAPIDAPI_KEY` - Upstream API key (no default)
    /// - `RAPIDAPI_HOST` - Upstream host header (default: tasty.p.rapidapi.com)
    /// - `UPSTREAM_BASE_URL` - Upstream base URL (default: https://tasty.p.rapidapi.com)
    /// - `CACHE_TTL_MS` - Cache TTL in milliseconds (default: 300000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `UPSTREAM_TIMEOUT_SECS` - Upstream timeout, 0 = none (default: 30)
    /// - `UPSTREAM_MAX_RETRIES` - Retries on 5xx/transport errors (default: 0)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            api_key: env::var("RAPIDAPI_KEY").ok().filter(|v| !v.trim().is_empty()),
            upstream_host: env::var("RAPIDAPI_HOST").unwrap_or(defaults.upstream_host),
            upstream_base_url: env::var("UPSTREAM_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.upstream_base_url),
            cache_ttl_ms: parse_var("CACHE_TTL_MS").unwrap_or(defaults.cache_ttl_ms),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            upstream_timeout_secs: parse_var("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or(defaults.upstream_timeout_secs),
            upstream_max_retries: parse_var("UPSTREAM_MAX_RETRIES")
                .unwrap_or(defaults.upstream_max_retries),
        }
    }

    /// Cache TTL as a `Duration`.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_millis(self.cache_ttl_ms)
    }

    /// Upstream timeout, or `None` when disabled.
    pub fn upstream_timeout(&self) -> Option<Duration> {
        (self.upstream_timeout_secs > 0).then(|| Duration::from_secs(self.upstream_timeout_secs))
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            upstream_host: DEFAULT_UPSTREAM_HOST.to_string(),
            upstream_base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            cache_ttl_ms: crate::cache::DEFAULT_TTL_MS,
            server_port: 3000,
            upstream_timeout_secs: 30,
            upstream_max_retries: 0,
        }
    }
}
