//! Successful-load record models.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::time;

/// Internal structure for record data.
/// The timestamp is atomic so a repeated success refreshes the record
/// in place without re-inserting it into the map.
pub struct CacheEntryInner {
    pub(crate) url: String,
    pub(crate) confirmed_at: AtomicI64,
}

/// CacheEntry represents a confirmed successful load of a resource.
#[derive(Clone)]
pub struct CacheEntry(pub(crate) Arc<CacheEntryInner>);

impl CacheEntry {
    /// Creates a new record confirmed now.
    pub fn new(url: impl Into<String>) -> Self {
        Self(Arc::new(CacheEntryInner {
            url: url.into(),
            confirmed_at: AtomicI64::new(time::unix_nano()),
        }))
    }

    /// The URL to serve for this record.
    pub fn url(&self) -> &str {
        &self.0.url
    }

    /// Unix nanoseconds of the last confirmed successful load.
    pub fn confirmed_at(&self) -> i64 {
        self.0.confirmed_at.load(Ordering::Relaxed)
    }

    /// Marks the record as confirmed now.
    pub(crate) fn touch_confirmed_at(&self) {
        self.0.confirmed_at.store(time::unix_nano(), Ordering::Relaxed);
    }

    /// Checks that elapsed time since the last confirmation exceeds TTL.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        let elapsed = time::unix_nano() - self.confirmed_at();
        elapsed > ttl.as_nanos() as i64
    }

    /// Helper to force a specific confirmation timestamp (used in tests).
    #[cfg(test)]
    pub fn set_confirmed_at_for_tests(&self, ts: i64) {
        self.0.confirmed_at.store(ts, Ordering::Relaxed);
    }
}
