//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use tracing::debug;

use crate::cache::ShardedCache;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{GetResponse, HealthResponse, SetRequest, StatsResponse, StatusResponse};

/// Application state shared across all handlers.
///
/// Holds a shared handle to the one cache built at startup.
#[derive(Clone)]
pub struct AppState {
    /// Sharded cache, internally synchronized
    pub cache: Arc<ShardedCache>,
}

impl AppState {
    /// Creates a new AppState around an existing cache.
    pub fn new(cache: Arc<ShardedCache>) -> Self {
        Self { cache }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the cache, which starts its sweeper on the current runtime.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = ShardedCache::with_sweep_interval(config.shard_count, config.sweep_interval())?;
        Ok(Self::new(Arc::new(cache)))
    }
}

/// Handler for POST /cache/set
///
/// Stores a key-value pair for `ttl` seconds. Body rejections (bad JSON,
/// missing or mistyped fields) are reported as 400.
pub async fn set_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SetRequest>, JsonRejection>,
) -> Result<Json<StatusResponse>> {
    let Json(req) = payload.map_err(|rejection| CacheError::InvalidRequest(rejection.body_text()))?;

    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let ttl = req.ttl();
    debug!("SET '{}' ttl={:?}", req.key, ttl);
    state.cache.set(req.key.clone(), req.value, ttl);

    Ok(Json(StatusResponse::success(req.key)))
}

/// Handler for GET /cache/{key}
///
/// Retrieves a value; absent and expired keys are both 404.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    let value = state
        .cache
        .get(&key)
        .ok_or_else(|| CacheError::NotFound("key not found".to_string()))?;

    Ok(Json(GetResponse::new(key, value)))
}

/// Handler for DELETE /cache/{key}
///
/// Always succeeds, whether or not the key existed.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<StatusResponse> {
    state.cache.delete(&key);
    Json(StatusResponse::success(key))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.cache.stats().into())
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
