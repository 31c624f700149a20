//! Request DTOs for the proxy API
//!
//! Everything arrives as query parameters on `GET /`.

use std::str::FromStr;

use serde::Deserialize;

use crate::error::{ProxyError, Result};

/// Page offset used when `from` is absent.
pub const DEFAULT_FROM: u32 = 0;

/// Page size used when `size` is absent.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Page size of the `featured` action.
pub const FEATURED_PAGE_SIZE: u32 = 8;

/// Raw query string of an incoming request.
///
/// All fields are optional so that extraction never fails; each handler
/// validates what it needs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionQuery {
    pub action: Option<String>,
    pub query: Option<String>,
    pub from: Option<String>,
    pub size: Option<String>,
    pub tags: Option<String>,
    pub id: Option<String>,
}

/// Supported proxy actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Search,
    Details,
    Featured,
    Tags,
}

impl FromStr for Action {
    type Err = ProxyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "search" => Ok(Action::Search),
            "details" => Ok(Action::Details),
            "featured" => Ok(Action::Featured),
            "tags" => Ok(Action::Tags),
            _ => Err(ProxyError::InvalidAction),
        }
    }
}

/// Validated parameters of the `search` action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub query: String,
    pub from: u32,
    pub size: u32,
    /// Sorted, de-duplicated tag names
    pub tags: Vec<String>,
}

impl SearchParams {
    /// Comma-joined tag list as sent upstream.
    pub fn tags_param(&self) -> String {
        self.tags.join(",")
    }
}

impl ActionQuery {
    /// Parses the `action` parameter.
    pub fn action(&self) -> Result<Action> {
        self.action
            .as_deref()
            .ok_or(ProxyError::InvalidAction)?
            .parse()
    }

    /// Validates the parameters of a `search` request.
    ///
    /// `query` must be present but may be empty.
    pub fn search_params(&self) -> Result<SearchParams> {
        let query = self
            .query
            .clone()
            .ok_or_else(|| ProxyError::InvalidRequest("Search query required".to_string()))?;

        Ok(SearchParams {
            query,
            from: parse_page_param("from", self.from.as_deref(), DEFAULT_FROM)?,
            size: parse_page_param("size", self.size.as_deref(), DEFAULT_PAGE_SIZE)?,
            tags: split_tags(self.tags.as_deref().unwrap_or_default()),
        })
    }

    /// Validates the `id` of a `details` request.
    pub fn recipe_id(&self) -> Result<&str> {
        self.id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ProxyError::InvalidRequest("Recipe ID required".to_string()))
    }
}

/// Splits a comma-joined tag list into sorted, unique, non-empty names.
pub fn split_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();
    tags.sort();
    tags.dedup();
    tags
}

fn parse_page_param(name: &str, raw: Option<&str>, default: u32) -> Result<u32> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value.parse().map_err(|_| {
            ProxyError::InvalidRequest(format!("Invalid '{}' parameter: {}", name, value))
        }),
    }
}
