//! Frontend configuration
//!
//! The wasm bundle cannot read files at runtime, so the configuration is an
//! embedded TOML document. A different document can be baked in at build time
//! through the `CATALOG_CONFIG` environment variable.

use super::error::ConfigError;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::str::FromStr;

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Absolute API base, e.g. "https://api.example.com". Empty means the
    /// page's own host on `port`.
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_port() -> u16 {
    3000
}

fn default_level() -> String {
    "debug".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            port: default_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl LoggingConfig {
    /// Unknown level names fall back to `Debug`.
    pub fn level(&self) -> log::Level {
        log::Level::from_str(self.level.trim()).unwrap_or(log::Level::Debug)
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
port = 3000

[logging]
level = "debug"
"#;

static CONFIG: Lazy<AppConfig> = Lazy::new(|| load_config().unwrap_or_default());

pub fn parse_config(text: &str) -> Result<AppConfig, ConfigError> {
    Ok(toml::from_str(text)?)
}

/// Load configuration
///
/// Uses the build-time `CATALOG_CONFIG` document when present, the embedded
/// default otherwise. An invalid override is reported as an error; callers
/// fall back to the default.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    match option_env!("CATALOG_CONFIG") {
        Some(text) => parse_config(text),
        None => parse_config(DEFAULT_CONFIG),
    }
}

/// Process-wide configuration, parsed once
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.logging.level(), log::Level::Debug);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = parse_config("[api]\nbase_url = \"https://api.example.com/\"\n").unwrap();
        assert_eq!(config.api.base_url, "https://api.example.com/");
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_log_level_parsing() {
        let warn = LoggingConfig {
            level: "warn".into(),
        };
        assert_eq!(warn.level(), log::Level::Warn);

        let garbage = LoggingConfig {
            level: "loud".into(),
        };
        assert_eq!(garbage.level(), log::Level::Debug);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(parse_config("[api\nport = ").is_err());
        assert!(parse_config("[api]\nport = \"many\"").is_err());
    }
}
