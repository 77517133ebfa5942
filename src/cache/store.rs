//! Cache Store Module
//!
//! The sharded cache engine: routes keys to shards and owns the sweeper.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::{fnv1a_64, CacheStats, Shard, StatsRecorder};
use crate::error::{CacheError, Result};
use crate::tasks::{spawn_sweeper, sweep_shards};

/// Sweep interval used by [`ShardedCache::new`].
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(1);

/// Shard counts are never rounded below this.
pub const MIN_SHARD_COUNT: usize = 2;

/// Largest power of two a `usize` can hold; rounding saturates here.
pub const MAX_SHARD_COUNT: usize = 1 << (usize::BITS - 1);

// == Sharded Cache ==
/// Concurrent TTL cache split across a power-of-two number of shards.
///
/// Every key lives in exactly one shard, picked by `fnv1a_64(key) & (n - 1)`.
/// Operations on different shards never contend. A background sweeper spawned
/// at construction removes expired entries until [`close`](Self::close) is
/// called or the cache is dropped.
#[derive(Debug)]
pub struct ShardedCache {
    /// Fixed shard array, shared only with the sweeper task
    shards: Arc<[Shard]>,
    /// `shards.len() - 1`
    mask: u64,
    /// Sweeper counters; read counters live on each shard
    stats: Arc<StatsRecorder>,
    /// Flipped to `true` once to stop the sweeper
    shutdown: watch::Sender<bool>,
    /// Sweeper task handle
    sweeper: JoinHandle<()>,
}

impl ShardedCache {
    // == Constructor ==
    /// Creates a cache with at least `shard_count` shards and the default
    /// one second sweep interval.
    ///
    /// Must be called from within a Tokio runtime, which hosts the sweeper.
    pub fn new(shard_count: usize) -> Result<Self> {
        Self::with_sweep_interval(shard_count, DEFAULT_SWEEP_INTERVAL)
    }

    /// Creates a cache whose sweeper ticks every `sweep_interval`.
    ///
    /// # Errors
    /// - `InvalidConfig` if `sweep_interval` is zero
    /// - `SweeperStart` if there is no Tokio runtime to spawn the sweeper on
    pub fn with_sweep_interval(shard_count: usize, sweep_interval: Duration) -> Result<Self> {
        if sweep_interval.is_zero() {
            return Err(CacheError::InvalidConfig(
                "sweep interval must be greater than zero".to_string(),
            ));
        }

        let runtime = Handle::try_current().map_err(|e| CacheError::SweeperStart(e.to_string()))?;

        let count = normalize_shard_count(shard_count);
        let shards: Arc<[Shard]> = (0..count).map(|_| Shard::new()).collect();
        let stats = Arc::new(StatsRecorder::new());
        let (shutdown, shutdown_rx) = watch::channel(false);

        let sweeper = spawn_sweeper(
            &runtime,
            Arc::clone(&shards),
            Arc::clone(&stats),
            sweep_interval,
            shutdown_rx,
        );

        info!(
            "Sharded cache created: shards={} (requested {}), sweep_interval={:?}",
            count, shard_count, sweep_interval
        );

        Ok(Self {
            shards,
            mask: (count - 1) as u64,
            stats,
            shutdown,
            sweeper,
        })
    }

    // == Routing ==
    /// Returns the index of the shard that owns `key`.
    #[inline]
    pub fn route(&self, key: &str) -> usize {
        (fnv1a_64(key) & self.mask) as usize
    }

    #[inline]
    fn shard_for(&self, key: &str) -> &Shard {
        &self.shards[self.route(key)]
    }

    // == Set ==
    /// Stores `value` under `key` for `ttl`, replacing any previous entry.
    ///
    /// A zero TTL stores an entry that is already expired.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>, ttl: Duration) {
        let key = key.into();
        self.shard_for(&key).set(key, value.into(), ttl);
    }

    // == Get ==
    /// Returns the value for `key` if it exists and has not expired.
    ///
    /// Expired entries are hidden, not removed.
    pub fn get(&self, key: &str) -> Option<String> {
        self.shard_for(key).get(key)
    }

    // == Delete ==
    /// Removes `key`. Deleting an absent key is a no-op.
    pub fn delete(&self, key: &str) {
        if self.shard_for(key).delete(key) {
            debug!("Deleted key '{}'", key);
        }
    }

    // == Close ==
    /// Stops the background sweeper.
    ///
    /// Safe to call any number of times. Does not wait for the sweeper to
    /// exit and leaves stored entries untouched.
    pub fn close(&self) {
        let was_closed = self.shutdown.send_replace(true);
        if !was_closed {
            info!("Sharded cache closed, sweeper stopping");
        }
    }

    /// Returns true once [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        *self.shutdown.borrow()
    }

    /// Returns true once the sweeper task has exited.
    pub fn is_sweeper_finished(&self) -> bool {
        self.sweeper.is_finished()
    }

    // == Sweep ==
    /// Runs one sweep pass over every shard on the calling thread.
    ///
    /// Returns the number of entries removed.
    pub fn sweep_expired(&self) -> usize {
        let removed = sweep_shards(&self.shards);
        self.stats.record_sweep(removed);
        removed
    }

    // == Inspection ==
    /// Number of shards, always a power of two.
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// Entries physically stored, expired-but-unswept ones included.
    pub fn stored_len(&self) -> usize {
        self.shards.iter().map(Shard::len).sum()
    }

    /// Entries currently visible to readers.
    pub fn live_len(&self) -> usize {
        self.shards.iter().map(Shard::live_len).sum()
    }

    /// Returns current cache statistics.
    ///
    /// Read counters are summed shard by shard, so the totals are not a
    /// single atomic snapshot while readers are active.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.snapshot();
        stats.hits = self.shards.iter().map(Shard::hits).sum();
        stats.misses = self.shards.iter().map(Shard::misses).sum();
        stats.stored_entries = self.stored_len();
        stats.live_entries = self.live_len();
        stats.shard_count = self.shard_count();
        stats
    }
}

impl Drop for ShardedCache {
    fn drop(&mut self) {
        self.close();
    }
}

// == Shard Count ==
/// Rounds a requested shard count up to a power of two, minimum 2.
pub fn normalize_shard_count(requested: usize) -> usize {
    requested
        .max(MIN_SHARD_COUNT)
        .checked_next_power_of_two()
        .unwrap_or(MAX_SHARD_COUNT)
}
