//! Nano Cache - A sharded in-memory cache server
//!
//! Keys are spread over independently locked shards by an FNV-1a hash, each
//! entry carries its own TTL, and a background sweeper reclaims expired entries.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::{create_router, AppState};
pub use cache::ShardedCache;
pub use config::Config;
pub use error::CacheError;
