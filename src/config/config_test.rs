#[cfg(test)]
mod tests {
    use crate::config::{Config, ConfigError, ConfigTrait};
    use std::time::Duration;

    #[test]
    fn test_full_config_parses_humantime_durations() {
        let yaml = r#"
cache:
  env: prod
  logs:
    level: info
  lifetime:
    ttl: 24h
  retry:
    max_attempts: 3
    backoff_step: 1s
"#;
        let cfg = Config::from_yaml(yaml).unwrap();
        assert!(cfg.is_prod());
        assert_eq!(cfg.logs().and_then(|l| l.level.as_deref()), Some("info"));
        assert_eq!(cfg.ttl(), Duration::from_secs(24 * 60 * 60));
        assert_eq!(cfg.max_retries(), 3);
        assert_eq!(cfg.backoff_step(), Duration::from_secs(1));
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let yaml = r#"
cache:
  env: dev
"#;
        let cfg = Config::from_yaml(yaml).unwrap();
        assert!(!cfg.is_prod());
        assert_eq!(cfg.ttl(), Duration::from_secs(24 * 60 * 60));
        assert_eq!(cfg.max_retries(), 3);
        assert_eq!(cfg.backoff_step(), Duration::from_secs(1));
    }

    #[test]
    fn test_retry_overrides() {
        let yaml = r#"
cache:
  env: test
  retry:
    max_attempts: 5
    backoff_step: 250ms
"#;
        let cfg = Config::from_yaml(yaml).unwrap();
        assert_eq!(cfg.max_retries(), 5);
        assert_eq!(cfg.backoff_step(), Duration::from_millis(250));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Config::load("/nonexistent/imgcache.cfg.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let err = Config::from_yaml("cache: [not a mapping").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
