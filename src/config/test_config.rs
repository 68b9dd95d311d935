use super::{CacheBox, Config, Lifetime, Logs, Retry};
use std::time::Duration;

/// Creates a new test configuration.
pub fn new_test_config() -> Config {
    Config {
        cache: CacheBox {
            env: super::TEST.to_string(),
            logs: Some(Logs {
                level: Some("debug".to_string()),
            }),
            lifetime: Some(Lifetime {
                ttl: Some(Duration::from_secs(24 * 60 * 60)),
            }),
            retry: Some(Retry {
                max_attempts: Some(3),
                backoff_step: Some(Duration::from_secs(1)),
            }),
        },
    }
}
