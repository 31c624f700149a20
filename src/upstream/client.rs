//! Recipe API client
//!
//! Authenticated GET requests against the upstream recipe API.

use reqwest::Client as HttpClient;
use serde_json::Value;
use tracing::{error, info, warn};

use super::backoff::{backoff_delay, is_retryable};
use crate::config::Config;
use crate::error::{ProxyError, Result};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-rapidapi-key";

/// Header carrying the upstream host identifier.
pub const API_HOST_HEADER: &str = "x-rapidapi-host";

/// Client for the upstream recipe API.
///
/// A failed call is returned to the caller as is; retries only happen when
/// `max_retries` is configured above zero.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: HttpClient,
    base_url: String,
    host: String,
    api_key: Option<String>,
    max_retries: u32,
}

impl UpstreamClient {
    /// Builds a client from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = HttpClient::builder();
        if let Some(timeout) = config.upstream_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ProxyError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.upstream_base_url.trim_end_matches('/').to_string(),
            host: config.upstream_host.clone(),
            api_key: config.api_key.clone(),
            max_retries: config.upstream_max_retries,
        })
    }

    /// True when an API key is available.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// GETs `path` with the non-empty `params` appended as query parameters.
    pub async fn fetch(&self, path: &str, params: &[(&str, &str)]) -> Result<Value> {
        let api_key = self.api_key.as_deref().ok_or(ProxyError::MissingApiKey)?;
        let query: Vec<(&str, &str)> = params
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .copied()
            .collect();
        let url = format!("{}{}", self.base_url, path);

        let mut attempt = 0;
        loop {
            match self.send(&url, &query, api_key).await {
                Ok(value) => return Ok(value),
                Err(err) if attempt < self.max_retries && is_retryable(&err) => {
                    attempt += 1;
                    let delay = backoff_delay(attempt);
                    warn!(
                        "Upstream call to {} failed ({}), retry {} of {} in {:?}",
                        path, err, attempt, self.max_retries, delay
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn send(&self, url: &str, query: &[(&str, &str)], api_key: &str) -> Result<Value> {
        info!("Fetching from upstream: {} {:?}", url, query);

        let response = self
            .http
            .get(url)
            .query(query)
            .header(API_KEY_HEADER, api_key)
            .header(API_HOST_HEADER, &self.host)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!(
                "Upstream API error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or_default()
            );
            return Err(ProxyError::Upstream {
                status: status.as_u16(),
            });
        }

        Ok(response.json::<Value>().await?)
    }
}
