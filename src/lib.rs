//! Sitedata: Site Identity Resolution
//!
//! Resolves the three site-identity strings a static site renderer consumes
//! as template data (operator name, blog title, footer text) from process
//! environment variables, percent-decoding each value and falling back to a
//! fixed default when a variable is unset or empty.

pub mod decode;
pub mod env;
pub mod error;
pub mod identity;
pub mod logging;
pub mod provider;

pub use env::{EnvSource, MapSource, ProcessEnv};
pub use error::SiteDataError;
pub use identity::SiteIdentity;
pub use logging::{init_logging, LoggingConfig};
pub use provider::site_identity;
