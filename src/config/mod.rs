// Configuration loading and management.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

pub const PROD: &str = "prod";
#[allow(dead_code)]
pub const DEV: &str = "dev";
#[allow(dead_code)]
pub const TEST: &str = "test";

/// Default age after which a confirmed record is evicted.
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);
/// Default retry budget per resource.
pub const DEFAULT_MAX_RETRIES: u32 = 3;
/// Default linear backoff step (delay = step * attempt).
pub const DEFAULT_BACKOFF_STEP: Duration = Duration::from_secs(1);

/// Errors produced while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Cache {
    #[serde(rename = "cache")]
    pub cache: CacheBox,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheBox {
    pub env: String,
    pub logs: Option<Logs>,
    pub lifetime: Option<Lifetime>,
    pub retry: Option<Retry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Logs {
    pub level: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Lifetime {
    #[serde(rename = "ttl", default, with = "humantime_serde")]
    pub ttl: Option<Duration>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Retry {
    #[serde(rename = "max_attempts")]
    pub max_attempts: Option<u32>,
    #[serde(rename = "backoff_step", default, with = "humantime_serde")]
    pub backoff_step: Option<Duration>,
}

// Config trait
pub trait ConfigTrait {
    fn logs(&self) -> Option<&Logs>;
    fn is_prod(&self) -> bool;
    fn ttl(&self) -> Duration;
    fn max_retries(&self) -> u32;
    fn backoff_step(&self) -> Duration;
}

// Config type alias for convenience
pub type Config = Cache;

impl ConfigTrait for Config {
    fn logs(&self) -> Option<&Logs> {
        self.cache.logs.as_ref()
    }

    fn is_prod(&self) -> bool {
        self.cache.env == PROD
    }

    fn ttl(&self) -> Duration {
        self.cache
            .lifetime
            .as_ref()
            .and_then(|l| l.ttl)
            .unwrap_or(DEFAULT_TTL)
    }

    fn max_retries(&self) -> u32 {
        self.cache
            .retry
            .as_ref()
            .and_then(|r| r.max_attempts)
            .unwrap_or(DEFAULT_MAX_RETRIES)
    }

    fn backoff_step(&self) -> Duration {
        self.cache
            .retry
            .as_ref()
            .and_then(|r| r.backoff_step)
            .unwrap_or(DEFAULT_BACKOFF_STEP)
    }
}

impl Config {
    /// Loads configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&data)
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml(data: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(data)?)
    }
}

// Test config is always available for integration tests
mod test_config;
#[allow(dead_code)]
pub use test_config::new_test_config;

#[cfg(test)]
mod config_test;
