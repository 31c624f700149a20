//! Error types for the recipe proxy
//!
//! Every failure is rendered through the same `{ "error": string }` envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Proxy Error Enum ==
/// Unified error type for the recipe proxy.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// The upstream API key is not configured
    #[error("API key not configured")]
    MissingApiKey,

    /// The `action` parameter is missing or unknown
    #[error("Invalid action. Use: search, details, featured, or tags")]
    InvalidAction,

    /// A handler-specific parameter is missing or malformed
    #[error("{0}")]
    InvalidRequest(String),

    /// Upstream answered with a non-success status
    #[error("Upstream API error: {status}")]
    Upstream { status: u16 },

    /// Upstream could not be reached
    #[error("Upstream request failed: {0}")]
    Network(String),

    /// Upstream returned a payload we could not interpret
    #[error("Unexpected upstream payload: {0}")]
    Normalization(String),

    /// Internal server error
    #[error("{0}")]
    Internal(String),
}

impl ProxyError {
    /// HTTP status used for this error class.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::InvalidAction | ProxyError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ProxyError::MissingApiKey
            | ProxyError::Upstream { .. }
            | ProxyError::Network(_)
            | ProxyError::Normalization(_)
            | ProxyError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ProxyError::Upstream {
                status: status.as_u16(),
            },
            None if err.is_decode() => ProxyError::Normalization(err.to_string()),
            None => ProxyError::Network(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for ProxyError {
    fn from(err: serde_json::Error) -> Self {
        ProxyError::Normalization(err.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the recipe proxy.
pub type Result<T> = std::result::Result<T, ProxyError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::json;

    #[test]
    fn test_status_codes() {
        let cases = vec![
            (ProxyError::MissingApiKey, StatusCode::INTERNAL_SERVER_ERROR),
            (ProxyError::InvalidAction, StatusCode::BAD_REQUEST),
            (
                ProxyError::InvalidRequest("Recipe ID required".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ProxyError::Upstream { status: 503 },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ProxyError::Network("timed out".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ProxyError::Normalization("bad".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(ProxyError::MissingApiKey.to_string(), "API key not configured");
        assert_eq!(
            ProxyError::InvalidAction.to_string(),
            "Invalid action. Use: search, details, featured, or tags"
        );
        assert_eq!(
            ProxyError::Upstream { status: 429 }.to_string(),
            "Upstream API error: 429"
        );
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let response = ProxyError::InvalidRequest("Recipe ID required".to_string()).into_response();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(json, json!({ "error": "Recipe ID required" }));
    }
}
