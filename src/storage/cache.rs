// Image availability cache implementation.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::config::{Config, ConfigTrait};
use crate::metrics::meter;
use crate::model::{CacheEntry, LoadState, LoadStatus, RetryDecision};

pub(crate) const COMP_CACHE: &str = "image_cache";

/// Trait for the cache surface consumed by the UI layer.
///
/// Every operation is total over all string keys: unknown keys yield
/// `None`/`false` and no operation ever fails or panics.
pub trait Cache: Send + Sync {
    /// Returns the URL the caller should use to display the resource.
    /// Prefers the last known-good URL over a currently failing one.
    fn resolve(&self, key: &str) -> String;

    /// Records a successful load and refreshes the confirmed record.
    fn record_success(&self, key: &str);

    /// Records a failed load attempt and decides whether to retry.
    fn record_failure(&self, key: &str) -> RetryDecision;

    /// Returns the load state, or `None` if the key was never observed.
    fn load_state(&self, key: &str) -> Option<LoadState>;

    /// Checks whether a confirmed record exists for the key.
    fn has_cached_entry(&self, key: &str) -> bool;

    /// Zeroes the retry counter while preserving the current status.
    fn reset_retries(&self, key: &str);

    /// Drops both records for one key, returning whether anything was removed.
    fn remove(&self, key: &str) -> bool;

    /// Drops all records unconditionally.
    fn clear(&self);

    /// Returns current table lengths: (records, load states).
    fn stat(&self) -> (usize, usize);
}

/// Mutable cache tables.
/// Both maps live under one lock so the exists-check plus write in
/// `record_failure` is a single critical section, and eviction removes
/// a record and its load state without an observable gap.
pub(super) struct Tables {
    pub(super) entries: HashMap<String, CacheEntry>,
    pub(super) states: HashMap<String, LoadState>,
}

/// In-memory image availability cache.
///
/// Tracks per-resource load status, applies a bounded retry policy with
/// linear backoff and evicts confirmed records past their TTL. Owned by
/// the composition root and shared by reference; performs no I/O and
/// owns no timers.
pub struct ImageCache {
    pub(super) ttl: Duration,
    max_retries: u32,
    backoff_step: Duration,
    pub(super) tables: Mutex<Tables>,
}

impl ImageCache {
    /// Creates a new cache from configuration.
    pub fn new(cfg: &Config) -> Arc<Self> {
        let ttl = cfg.ttl();
        let max_retries = cfg.max_retries();
        let backoff_step = cfg.backoff_step();

        info!(
            component = COMP_CACHE,
            event = "created",
            ttl = %humantime::format_duration(ttl),
            max_retries,
            backoff_step = %humantime::format_duration(backoff_step),
            "image cache ready"
        );

        Arc::new(Self {
            ttl,
            max_retries,
            backoff_step,
            tables: Mutex::new(Tables {
                entries: HashMap::new(),
                states: HashMap::new(),
            }),
        })
    }

    fn publish_lengths(t: &Tables) {
        meter::set_entries_length(t.entries.len() as u64);
        meter::set_states_length(t.states.len() as u64);
    }
}

impl Cache for ImageCache {
    fn resolve(&self, key: &str) -> String {
        let t = self.tables.lock();

        // A failing resource with a confirmed record is served from it.
        if matches!(t.states.get(key), Some(s) if s.status == LoadStatus::Error) {
            if let Some(entry) = t.entries.get(key) {
                return entry.url().to_string();
            }
        }

        key.to_string()
    }

    fn record_success(&self, key: &str) {
        let mut t = self.tables.lock();

        if let Some(entry) = t.entries.get(key) {
            entry.touch_confirmed_at();
        } else {
            t.entries.insert(key.to_string(), CacheEntry::new(key));
        }
        t.states.insert(key.to_string(), LoadState::loaded());

        meter::add_successes(1);
        debug!(
            component = COMP_CACHE,
            event = "success_recorded",
            key,
            "load confirmed"
        );

        self.sweep(&mut t);
        Self::publish_lengths(&t);
    }

    fn record_failure(&self, key: &str) -> RetryDecision {
        let mut t = self.tables.lock();

        let decision = if t.entries.contains_key(key) {
            // A previously confirmed record is still servable through
            // resolve; absorb the failure instead of spending the retry
            // budget.
            t.states.insert(key.to_string(), LoadState::loaded());
            meter::add_fallbacks_restored(1);
            debug!(
                component = COMP_CACHE,
                event = "fallback_restored",
                key,
                "failure absorbed by confirmed record"
            );
            RetryDecision::give_up()
        } else {
            let retry_count = t.states.get(key).map(|s| s.retry_count).unwrap_or(0);

            if retry_count < self.max_retries {
                let attempt = retry_count + 1;
                let delay = self.backoff_step * attempt;
                t.states.insert(key.to_string(), LoadState::loading(attempt));

                meter::add_retries_scheduled(1);
                debug!(
                    component = COMP_CACHE,
                    event = "retry_scheduled",
                    key,
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    "retry advised"
                );
                RetryDecision::retry_after(delay)
            } else {
                t.states.insert(key.to_string(), LoadState::errored(retry_count));

                meter::add_retries_exhausted(1);
                warn!(
                    component = COMP_CACHE,
                    event = "retries_exhausted",
                    key,
                    retries = retry_count,
                    "resource marked as failed"
                );
                RetryDecision::give_up()
            }
        };

        Self::publish_lengths(&t);
        decision
    }

    fn load_state(&self, key: &str) -> Option<LoadState> {
        self.tables.lock().states.get(key).copied()
    }

    fn has_cached_entry(&self, key: &str) -> bool {
        self.tables.lock().entries.contains_key(key)
    }

    fn reset_retries(&self, key: &str) {
        let mut t = self.tables.lock();
        if let Some(state) = t.states.get_mut(key) {
            state.retry_count = 0;
            debug!(
                component = COMP_CACHE,
                event = "retries_reset",
                key,
                "retry budget restored"
            );
        }
    }

    fn remove(&self, key: &str) -> bool {
        let mut t = self.tables.lock();
        let had_entry = t.entries.remove(key).is_some();
        let had_state = t.states.remove(key).is_some();

        if had_entry || had_state {
            debug!(component = COMP_CACHE, event = "removed", key, "records dropped");
            Self::publish_lengths(&t);
        }
        had_entry || had_state
    }

    fn clear(&self) {
        let mut t = self.tables.lock();
        let entries = t.entries.len();
        let states = t.states.len();
        t.entries.clear();
        t.states.clear();

        info!(
            component = COMP_CACHE,
            event = "cleared",
            entries,
            states,
            "all records dropped"
        );
        Self::publish_lengths(&t);
    }

    fn stat(&self) -> (usize, usize) {
        let t = self.tables.lock();
        (t.entries.len(), t.states.len())
    }
}

#[cfg(test)]
impl ImageCache {
    /// Helper to force a specific confirmation timestamp (used in tests).
    pub fn set_confirmed_at_for_tests(&self, key: &str, ts: i64) {
        let t = self.tables.lock();
        if let Some(entry) = t.entries.get(key) {
            entry.set_confirmed_at_for_tests(ts);
        }
    }

    /// Helper to force a specific load state (used in tests).
    pub fn set_state_for_tests(&self, key: &str, state: LoadState) {
        let mut t = self.tables.lock();
        t.states.insert(key.to_string(), state);
    }
}
