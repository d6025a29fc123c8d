//! Configuration for the widget layer.
//!
//! Loads from a JSON config file or from environment variables.
//!
//! File shape:
//!
//! ```json
//! {
//!   "cache": { "enabled": true, "ttl": 60 },
//!   "widgets": { "greeting": "app/widgets/greeting" }
//! }
//! ```
//!
//! The `widgets` table seeds the registry with named references at startup
//! (see [`crate::setup`]). `ttl` is in seconds.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Cache behavior for rendered widget output.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    /// Whether rendered output is cached at all.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Lifetime of a cached render, in seconds in config form.
    #[serde(default = "default_ttl", deserialize_with = "duration_secs")]
    pub ttl: Duration,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            ttl: default_ttl(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_ttl() -> Duration {
    Duration::from_secs(60)
}

fn duration_secs<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let secs = u64::deserialize(deserializer)?;
    Ok(Duration::from_secs(secs))
}

/// Full widget-layer configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WidgetsConfig {
    /// Output cache settings.
    #[serde(default)]
    pub cache: CacheSettings,

    /// Initial alias -> widget-name seed for the registry.
    #[serde(default)]
    pub widgets: BTreeMap<String, String>,
}

/// Errors from loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl WidgetsConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Load cache settings from environment variables.
    ///
    /// Reads `WIDGETS_CACHE_ENABLED` and `WIDGETS_CACHE_TTL` (seconds),
    /// falling back to defaults when unset or unparseable. The widget seed
    /// table stays empty; env deployments register widgets in code.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let enabled = lookup("WIDGETS_CACHE_ENABLED")
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or_else(default_enabled);

        let ttl = lookup("WIDGETS_CACHE_TTL")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or_else(default_ttl);

        Self {
            cache: CacheSettings { enabled, ttl },
            widgets: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WidgetsConfig::default();
        assert!(config.cache.enabled);
        assert_eq!(config.cache.ttl, Duration::from_secs(60));
        assert!(config.widgets.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let config: WidgetsConfig = serde_json::from_str(
            r#"{
                "cache": { "enabled": false, "ttl": 300 },
                "widgets": { "greeting": "app/widgets/greeting" }
            }"#,
        )
        .unwrap();

        assert!(!config.cache.enabled);
        assert_eq!(config.cache.ttl, Duration::from_secs(300));
        assert_eq!(
            config.widgets.get("greeting").map(String::as_str),
            Some("app/widgets/greeting")
        );
    }

    #[test]
    fn test_parse_partial_config_uses_defaults() {
        let config: WidgetsConfig =
            serde_json::from_str(r#"{ "widgets": { "a": "b" } }"#).unwrap();

        assert!(config.cache.enabled);
        assert_eq!(config.cache.ttl, Duration::from_secs(60));
    }

    #[test]
    fn test_from_file() -> anyhow::Result<()> {
        let tmp = tempfile::tempdir()?;
        let path = tmp.path().join("widgets.json");
        std::fs::write(
            &path,
            r#"{ "cache": { "enabled": true, "ttl": 30 }, "widgets": { "greeting": "app/greeting" } }"#,
        )?;

        let config = WidgetsConfig::from_file(&path)?;
        assert_eq!(config.cache.ttl, Duration::from_secs(30));
        assert_eq!(
            config.widgets.get("greeting").map(String::as_str),
            Some("app/greeting")
        );
        Ok(())
    }

    #[test]
    fn test_from_file_missing_is_io_error() {
        let err = WidgetsConfig::from_file("/nonexistent/widgets.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_from_file_garbage_is_parse_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("widgets.json");
        std::fs::write(&path, "not json").unwrap();

        let err = WidgetsConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_env_lookup_parsing() {
        let config = WidgetsConfig::from_lookup(|key| match key {
            "WIDGETS_CACHE_ENABLED" => Some("false".to_string()),
            "WIDGETS_CACHE_TTL" => Some("120".to_string()),
            _ => None,
        });

        assert!(!config.cache.enabled);
        assert_eq!(config.cache.ttl, Duration::from_secs(120));
    }

    #[test]
    fn test_env_lookup_defaults_when_unset() {
        let config = WidgetsConfig::from_lookup(|_| None);

        assert!(config.cache.enabled);
        assert_eq!(config.cache.ttl, Duration::from_secs(60));
    }

    #[test]
    fn test_env_lookup_ignores_garbage_ttl() {
        let config = WidgetsConfig::from_lookup(|key| match key {
            "WIDGETS_CACHE_TTL" => Some("soon".to_string()),
            _ => None,
        });

        assert_eq!(config.cache.ttl, Duration::from_secs(60));
    }
}
