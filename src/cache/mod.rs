//! Cache Module
//!
//! Provides a sharded in-memory cache with per-entry TTL expiration.

mod entry;
mod hasher;
mod shard;
mod stats;
mod store;


// Re-export public types
pub use entry::{CacheEntry, MAX_TTL};
pub use hasher::fnv1a_64;
pub use shard::Shard;
pub use stats::{CacheStats, StatsRecorder};
pub use store::{
    normalize_shard_count, ShardedCache, DEFAULT_SWEEP_INTERVAL, MAX_SHARD_COUNT,
    MIN_SHARD_COUNT,
};
