//! Logging System
//!
//! Structured logging bootstrap using the `tracing` crate, for the hosting
//! renderer to install once at startup. Supports text or JSON output with
//! level and format overrides from the environment.

use crate::error::SiteDataError;
use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
        }
    }
}

/// Initialize the logging system
///
/// Priority order (highest to lowest):
/// 1. Environment variables (SITEDATA_LOG, SITEDATA_LOG_FORMAT)
/// 2. Provided configuration
/// 3. Defaults
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), SiteDataError> {
    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;

    let base_subscriber = Registry::default().with(filter);

    if format == "json" {
        base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stdout),
            )
            .init();
    } else {
        base_subscriber
            .with(fmt::layer().with_target(true).with_writer(std::io::stdout))
            .init();
    }

    Ok(())
}

/// Build the level filter from environment or config
fn build_env_filter(config: Option<&LoggingConfig>) -> Result<EnvFilter, SiteDataError> {
    if let Ok(env_level) = std::env::var("SITEDATA_LOG") {
        return EnvFilter::try_new(&env_level)
            .map_err(|e| SiteDataError::ConfigError(format!("Invalid SITEDATA_LOG: {}", e)));
    }

    let level = config.map(|c| c.level.as_str()).unwrap_or("info");
    EnvFilter::try_new(level)
        .map_err(|e| SiteDataError::ConfigError(format!("Invalid log level: {}", e)))
}

/// Determine output format from config or environment
fn determine_format(config: Option<&LoggingConfig>) -> Result<String, SiteDataError> {
    if let Ok(format) = std::env::var("SITEDATA_LOG_FORMAT") {
        if format == "json" || format == "text" {
            return Ok(format);
        }
    }

    let format = config.map(|c| c.format.as_str()).unwrap_or("text");

    if format != "json" && format != "text" {
        return Err(SiteDataError::ConfigError(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            format
        )));
    }

    Ok(format.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_logging_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, "text");
    }

    #[test]
    fn test_determine_format_rejects_unknown() {
        let config = LoggingConfig {
            level: "info".to_string(),
            format: "yaml".to_string(),
        };
        assert!(determine_format(Some(&config)).is_err());
    }

    #[test]
    fn test_build_env_filter_rejects_garbage_level() {
        let config = LoggingConfig {
            level: "extremely loud".to_string(),
            format: "text".to_string(),
        };
        assert!(build_env_filter(Some(&config)).is_err());
    }
}
