// Shared helpers for integration cases.

use std::sync::Arc;
use std::sync::Once;
use std::time::Duration;

use crate::config::{self, Config, Lifetime, Retry};
use crate::storage::ImageCache;

static INIT_LOGGING: Once = Once::new();

/// Installs the test logger once per test binary.
pub fn init_test_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = crate::logs::configure(&config::new_test_config());
    });
}

/// Builds a cache from the default test configuration.
pub fn new_test_cache() -> Arc<ImageCache> {
    init_test_logging();
    ImageCache::new(&config::new_test_config())
}

/// Builds a cache with an explicit TTL and retry policy.
pub fn new_cache_with(ttl: Duration, max_attempts: u32, backoff_step: Duration) -> Arc<ImageCache> {
    init_test_logging();
    let mut cfg: Config = config::new_test_config();
    cfg.cache.lifetime = Some(Lifetime { ttl: Some(ttl) });
    cfg.cache.retry = Some(Retry {
        max_attempts: Some(max_attempts),
        backoff_step: Some(backoff_step),
    });
    ImageCache::new(&cfg)
}
