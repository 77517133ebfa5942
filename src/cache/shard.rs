//! Cache Shard Module
//!
//! One independently locked slice of the keyspace.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use parking_lot::RwLock;

use crate::cache::CacheEntry;

// == Shard ==
/// A partition of the cache holding the keys routed to it.
///
/// Reads take the shared lock; `set`, `delete` and `sweep` take the
/// exclusive lock. Expired entries stay in the map until a sweep or an
/// overwriting `set` reclaims them.
///
/// Read outcomes are counted per shard so readers of different shards never
/// touch a common counter.
#[derive(Debug, Default)]
pub struct Shard {
    entries: RwLock<HashMap<String, CacheEntry>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl Shard {
    // == Constructor ==
    /// Creates an empty shard.
    pub fn new() -> Self {
        Self::default()
    }

    // == Set ==
    /// Inserts or replaces `key`, expiring `ttl` from now.
    pub fn set(&self, key: String, value: String, ttl: Duration) {
        let entry = CacheEntry::new(value, ttl);
        self.entries.write().insert(key, entry);
    }

    // == Get ==
    /// Returns the value for `key` if present and not expired.
    ///
    /// Expired entries are hidden but left in place.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = {
            let entries = self.entries.read();
            entries
                .get(key)
                .filter(|entry| !entry.is_expired())
                .map(|entry| entry.value.clone())
        };

        let counter = if value.is_some() { &self.hits } else { &self.misses };
        counter.fetch_add(1, Ordering::Relaxed);
        value
    }

    // == Delete ==
    /// Removes `key`, returning whether it was present.
    pub fn delete(&self, key: &str) -> bool {
        self.entries.write().remove(key).is_some()
    }

    // == Sweep ==
    /// Removes every expired entry and returns how many were dropped.
    pub fn sweep(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired_at(now));
        before - entries.len()
    }

    // == Length ==
    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Number of entries that are still visible to readers.
    pub fn live_len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .read()
            .values()
            .filter(|entry| !entry.is_expired_at(now))
            .count()
    }

    // == Read Counters ==
    /// Reads on this shard that found a live entry.
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Reads on this shard that found nothing or an expired entry.
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    // == Is Empty ==
    /// Returns true if nothing is stored, expired entries included.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
