//! Load-state models.

use std::time::Duration;

/// Load status of a resource as last reported by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Loaded,
    Error,
}

/// Per-resource load state.
/// Lives independently of the successful-load record for the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadState {
    pub status: LoadStatus,
    pub retry_count: u32,
}

impl LoadState {
    /// State after a confirmed load, retry budget restored.
    pub(crate) fn loaded() -> Self {
        Self {
            status: LoadStatus::Loaded,
            retry_count: 0,
        }
    }

    /// State while a retry attempt is pending.
    pub(crate) fn loading(retry_count: u32) -> Self {
        Self {
            status: LoadStatus::Loading,
            retry_count,
        }
    }

    /// State after the retry budget has been spent.
    pub(crate) fn errored(retry_count: u32) -> Self {
        Self {
            status: LoadStatus::Error,
            retry_count,
        }
    }
}

/// Verdict returned to the caller after a failed load attempt.
/// The delay is advisory; the cache owns no timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryDecision {
    pub should_retry: bool,
    pub delay: Option<Duration>,
}

impl RetryDecision {
    pub(crate) fn retry_after(delay: Duration) -> Self {
        Self {
            should_retry: true,
            delay: Some(delay),
        }
    }

    pub(crate) fn give_up() -> Self {
        Self {
            should_retry: false,
            delay: None,
        }
    }
}
