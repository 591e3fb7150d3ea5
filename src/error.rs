//! Error types for site-data resolution.

use crate::decode::DecodeError;
use thiserror::Error;

/// Site-data errors
#[derive(Debug, Error)]
pub enum SiteDataError {
    #[error("Invalid value for {variable}: {source}")]
    Decode {
        variable: &'static str,
        #[source]
        source: DecodeError,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
