//! Cache Statistics Module
//!
//! Aggregates per-shard read counters and sweeper activity without taking any
//! shard lock.

use std::sync::atomic::{AtomicU64, Ordering};

// == Stats Recorder ==
/// Sweeper counters shared by the cache and its sweeper task.
///
/// Hits and misses live on each [`Shard`](crate::cache::Shard) instead, so the
/// read path never writes to this struct.
#[derive(Debug, Default)]
pub struct StatsRecorder {
    reclaimed: AtomicU64,
    sweeps: AtomicU64,
}

impl StatsRecorder {
    /// Creates a recorder with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one completed sweep pass that removed `removed` entries.
    pub fn record_sweep(&self, removed: usize) {
        self.sweeps.fetch_add(1, Ordering::Relaxed);
        self.reclaimed.fetch_add(removed as u64, Ordering::Relaxed);
    }

    /// Copies the counters into a snapshot. Read counts and entry counts are
    /// filled in by the cache.
    pub fn snapshot(&self) -> CacheStats {
        CacheStats {
            reclaimed: self.reclaimed.load(Ordering::Relaxed),
            sweeps: self.sweeps.load(Ordering::Relaxed),
            ..CacheStats::default()
        }
    }
}

// == Cache Stats ==
/// Point-in-time view of the cache counters.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Reads that found a live entry
    pub hits: u64,
    /// Reads that found nothing or an expired entry
    pub misses: u64,
    /// Entries physically removed by the sweeper
    pub reclaimed: u64,
    /// Completed sweeper passes
    pub sweeps: u64,
    /// Entries currently stored, expired-but-unswept included
    pub stored_entries: usize,
    /// Entries currently visible to readers
    pub live_entries: usize,
    /// Number of shards
    pub shard_count: usize,
}

impl CacheStats {
    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no reads have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
