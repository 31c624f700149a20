//! API Handlers
//!
//! The action dispatcher behind `GET /` plus the operational endpoints.

use std::future::Future;
use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, warn};

use crate::cache::{CacheKey, MemoryCache, ResponseCache};
use crate::config::Config;
use crate::error::{ProxyError, Result};
use crate::models::requests::FEATURED_PAGE_SIZE;
use crate::models::{
    Action, ActionQuery, HealthResponse, RawRecipe, RawRecipeList, RawTagList, RecipeDetails,
    SearchParams, SearchResult, StatsResponse, TagList,
};
use crate::normalize::{normalize_recipe_details, normalize_search_results, normalize_tags};
use crate::upstream::{UpstreamClient, RECIPES_LIST_PATH, RECIPE_DETAILS_PATH, TAGS_LIST_PATH};

/// Application state shared across all handlers.
///
/// The cache is held behind the `ResponseCache` trait so a shared store can
/// replace the in-process one.
#[derive(Clone)]
pub struct AppState {
    /// Normalized response cache
    pub cache: Arc<dyn ResponseCache>,
    /// Upstream recipe API client
    pub upstream: Arc<UpstreamClient>,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(cache: Arc<dyn ResponseCache>, upstream: UpstreamClient) -> Self {
        Self {
            cache,
            upstream: Arc::new(upstream),
        }
    }

    /// Creates a new AppState from configuration, with an in-memory cache.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = Arc::new(MemoryCache::new(config.cache_ttl()));
        Ok(Self::new(cache, UpstreamClient::new(config)?))
    }
}

/// Handler for GET /?action=...
///
/// Checks the API key, then dispatches on `action`. Every failure is
/// logged here and rendered through the error envelope.
pub async fn action_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<ActionQuery>, QueryRejection>,
) -> Result<Json<Value>> {
    let result = match query {
        Ok(Query(params)) => dispatch(&state, &params).await,
        Err(rejection) => Err(ProxyError::InvalidRequest(rejection.body_text())),
    };

    match &result {
        Err(err) if err.status_code().is_server_error() => {
            error!("Error handling request: {}", err)
        }
        Err(err) => warn!("Rejected request: {}", err),
        Ok(_) => {}
    }

    result.map(Json)
}

async fn dispatch(state: &AppState, params: &ActionQuery) -> Result<Value> {
    if !state.upstream.has_api_key() {
        return Err(ProxyError::MissingApiKey);
    }

    match params.action()? {
        Action::Search => search(state, params.search_params()?).await,
        Action::Details => details(state, params.recipe_id()?).await,
        Action::Featured => featured(state).await,
        Action::Tags => tags(state).await,
    }
}

async fn search(state: &AppState, params: SearchParams) -> Result<Value> {
    let key = CacheKey::Search {
        query: &params.query,
        from: params.from,
        size: params.size,
        tags: &params.tags,
    };

    cached(state.cache.as_ref(), key, fetch_search(&state.upstream, &params)).await
}

async fn details(state: &AppState, id: &str) -> Result<Value> {
    cached(
        state.cache.as_ref(),
        CacheKey::Details { id },
        fetch_details(&state.upstream, id),
    )
    .await
}

async fn featured(state: &AppState) -> Result<Value> {
    let params = SearchParams {
        query: String::new(),
        from: 0,
        size: FEATURED_PAGE_SIZE,
        tags: Vec::new(),
    };

    cached(
        state.cache.as_ref(),
        CacheKey::Featured,
        fetch_search(&state.upstream, &params),
    )
    .await
}

async fn tags(state: &AppState) -> Result<Value> {
    cached(state.cache.as_ref(), CacheKey::Tags, fetch_tags(&state.upstream)).await
}

/// Serves `key` from the cache, or runs `load` and stores its result.
///
/// `load` is only polled on a miss. Failures are never stored.
async fn cached<T: Serialize>(
    cache: &dyn ResponseCache,
    key: CacheKey<'_>,
    load: impl Future<Output = Result<T>>,
) -> Result<Value> {
    let key = key.to_string();
    if let Some(hit) = cache.get(&key).await {
        return Ok(hit);
    }

    let value = serde_json::to_value(load.await?)?;
    cache.put(key, value.clone()).await;
    Ok(value)
}

async fn fetch_search(upstream: &UpstreamClient, params: &SearchParams) -> Result<SearchResult> {
    let from = params.from.to_string();
    let size = params.size.to_string();
    let tags = params.tags_param();

    let raw = upstream
        .fetch(
            RECIPES_LIST_PATH,
            &[
                ("q", params.query.as_str()),
                ("from", from.as_str()),
                ("size", size.as_str()),
                ("tags", tags.as_str()),
            ],
        )
        .await?;

    let list: RawRecipeList = serde_json::from_value(raw)?;
    Ok(normalize_search_results(list))
}

async fn fetch_details(upstream: &UpstreamClient, id: &str) -> Result<RecipeDetails> {
    let raw = upstream.fetch(RECIPE_DETAILS_PATH, &[("id", id)]).await?;
    let recipe: RawRecipe = serde_json::from_value(raw)?;
    Ok(normalize_recipe_details(recipe))
}

async fn fetch_tags(upstream: &UpstreamClient) -> Result<TagList> {
    let raw = upstream.fetch(TAGS_LIST_PATH, &[]).await?;
    let list: RawTagList = serde_json::from_value(raw)?;
    Ok(normalize_tags(list))
}

/// Handler for GET /stats
///
/// Returns cache hit/miss counters.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.cache.stats().await))
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.upstream.has_api_key()))
}
