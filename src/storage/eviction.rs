// TTL-based eviction sweep.

use tracing::debug;

use crate::metrics::meter;

use super::cache::{ImageCache, Tables, COMP_CACHE};

impl ImageCache {
    /// Removes every confirmed record older than TTL together with its
    /// load state. Full linear scan; the cache holds at most the images
    /// of the recently viewed galleries, not an unbounded history.
    pub(super) fn sweep(&self, t: &mut Tables) {
        let expired: Vec<String> = t
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(self.ttl))
            .map(|(key, _)| key.clone())
            .collect();

        if expired.is_empty() {
            return;
        }

        for key in &expired {
            t.entries.remove(key);
            t.states.remove(key);
        }

        meter::add_evictions(expired.len() as u64);
        debug!(
            component = COMP_CACHE,
            event = "evicted",
            count = expired.len(),
            "expired records removed"
        );
    }
}
