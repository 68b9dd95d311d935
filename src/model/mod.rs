// Package model provides cache records and load-state types.

pub mod entry;
pub mod state;


// Re-export main types
pub use entry::CacheEntry;
pub use state::{LoadState, LoadStatus, RetryDecision};
