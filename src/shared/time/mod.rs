//! Unix-time helpers.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Returns the current time.
pub fn now() -> SystemTime {
    SystemTime::now()
}

/// Returns the current time as Unix nanoseconds.
pub fn unix_nano() -> i64 {
    now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_nanos() as i64
}

/// Returns the duration elapsed since the given time.
pub fn since(t: SystemTime) -> Duration {
    now().duration_since(t).unwrap_or(Duration::ZERO)
}
