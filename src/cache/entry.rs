//! Cache Entry Module
//!
//! Defines a single cached response body stamped with its insertion time.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A cached payload and the instant it was stored.
///
/// Timestamps come from `tokio::time::Instant` so a paused test clock drives
/// both insertion and reaping.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored bytes, opaque to the cache
    pub value: Vec<u8>,
    /// When the entry was inserted or last overwritten
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry stamped with the current instant.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived `interval` as of `now`.
    ///
    /// Boundary condition: an entry is expired once `created_at + interval`
    /// is at or before `now`, so a sweep landing exactly one interval after
    /// insertion removes it. An interval too large to represent never expires.
    pub fn is_expired_at(&self, now: Instant, interval: Duration) -> bool {
        self.created_at
            .checked_add(interval)
            .is_some_and(|deadline| deadline <= now)
    }

    // == Age ==
    /// Time elapsed since the entry was stored.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }
}
