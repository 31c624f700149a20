//! Bodies for the operational endpoints and the error envelope.
//!
//! Recipe payloads live in `models::recipe`.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cache::CacheStats;

/// GET /stats
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub cache: CacheStats,
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(cache: CacheStats) -> Self {
        Self {
            hit_rate: cache.hit_rate(),
            cache,
        }
    }
}

/// GET /health
///
/// `upstream_configured` is false when no API key was supplied; the process
/// still answers but every recipe action fails.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub upstream_configured: bool,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy(upstream_configured: bool) -> Self {
        Self {
            status: "healthy",
            upstream_configured,
            timestamp: Utc::now(),
        }
    }
}

/// `{ "error": message }`, the body of every failed request.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stats_response_flattens_counters() {
        let cache = CacheStats {
            hits: 80,
            misses: 20,
            expired: 5,
            total_entries: 12,
        };

        let value = serde_json::to_value(StatsResponse::from(cache)).unwrap();
        assert_eq!(
            value,
            json!({
                "hits": 80,
                "misses": 20,
                "expired": 5,
                "total_entries": 12,
                "hit_rate": 0.8
            })
        );
    }

    #[test]
    fn test_stats_response_without_lookups() {
        let resp = StatsResponse::from(CacheStats::new());
        assert_eq!(resp.hit_rate, 0.0);
    }

    #[test]
    fn test_health_response_serialize() {
        let value = serde_json::to_value(HealthResponse::healthy(false)).unwrap();

        assert_eq!(value["status"], "healthy");
        assert_eq!(value["upstream_configured"], false);
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn test_error_response_serialize() {
        let json = serde_json::to_string(&ErrorResponse::new("Recipe ID required")).unwrap();
        assert_eq!(json, r#"{"error":"Recipe ID required"}"#);
    }
}
