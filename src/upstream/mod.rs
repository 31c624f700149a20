//! Upstream Module
//!
//! HTTP access to the external recipe API.

mod backoff;
mod client;

pub use backoff::{backoff_delay, is_retryable};
pub use client::{UpstreamClient, API_HOST_HEADER, API_KEY_HEADER};

/// Recipe search endpoint.
pub const RECIPES_LIST_PATH: &str = "/recipes/list";

/// Single recipe endpoint.
pub const RECIPE_DETAILS_PATH: &str = "/recipes/get-more-info";

/// Tag catalogue endpoint.
pub const TAGS_LIST_PATH: &str = "/tags/list";
