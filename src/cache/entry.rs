//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

/// Upper bound applied to every TTL so `created_at + ttl` cannot overflow.
pub const MAX_TTL: Duration = Duration::from_secs(u32::MAX as u64);

// == Cache Entry ==
/// Represents a single cache entry with value and expiry metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored value
    pub value: String,
    /// Instant the entry was written
    pub created_at: Instant,
    /// Instant at which the entry stops being visible
    pub expires_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl` from now.
    ///
    /// A zero TTL yields an entry that is already expired. TTLs above
    /// [`MAX_TTL`] are clamped.
    pub fn new(value: String, ttl: Duration) -> Self {
        Self::written_at(value, ttl, Instant::now())
    }

    /// Creates an entry as if it had been written at `now`.
    pub fn written_at(value: String, ttl: Duration, now: Instant) -> Self {
        Self {
            value,
            created_at: now,
            expires_at: now + ttl.min(MAX_TTL),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time reaches `expires_at`, so an
    /// entry is visible only while `now < expires_at`.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// Same as [`is_expired`](Self::is_expired) against a caller-supplied clock.
    #[inline]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
