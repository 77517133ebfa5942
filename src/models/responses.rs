//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for the GET operation (GET /cache/{key})
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested key
    pub key: String,
    /// The stored value
    pub value: String,
}

impl GetResponse {
    /// Creates a new GetResponse
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Response body for SET and DELETE
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    /// Always "success"
    pub status: String,
    /// The key that was written or deleted
    pub key: String,
}

impl StatusResponse {
    /// Creates a new success response for `key`
    pub fn success(key: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            key: key.into(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Entries stored, including expired ones awaiting a sweep
    pub stored_entries: usize,
    /// Entries still visible to readers
    pub live_entries: usize,
    /// Entries removed by the sweeper so far
    pub reclaimed: u64,
    /// Completed sweeper passes
    pub sweeps: u64,
    /// Number of shards
    pub shard_count: usize,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            stored_entries: stats.stored_entries,
            live_entries: stats.live_entries,
            reclaimed: stats.reclaimed,
            sweeps: stats.sweeps,
            shard_count: stats.shard_count,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
