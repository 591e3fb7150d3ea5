//! Site Identity Resolution
//!
//! The ordered fallback pipeline behind [`site_identity`]: look the variable
//! up in the source, treat a set-but-empty value the same as unset,
//! percent-decode, and fall back to the field default when the variable is
//! absent or its value is malformed.

use crate::decode;
use crate::env::{names, EnvSource, ProcessEnv};
use crate::error::SiteDataError;
use crate::identity::{SiteIdentity, DEFAULT_BLOG_TITLE, DEFAULT_FOOTER_TEXT, DEFAULT_NAME};
use tracing::warn;

/// Resolve the site identity from the process environment.
///
/// Never fails: a variable that is unset, empty, or carries a malformed
/// percent-encoded value resolves to the field default (malformed values are
/// logged at warn level, naming the offending variable). Calling twice under
/// an unchanged environment yields structurally equal results.
pub fn site_identity() -> SiteIdentity {
    SiteIdentity::from_source(&ProcessEnv)
}

impl SiteIdentity {
    /// Resolve against an explicit source instead of the process environment.
    pub fn from_source<S: EnvSource>(source: &S) -> Self {
        Self {
            name: resolve_field(source, names::BLOG_NAME, DEFAULT_NAME),
            blog_title: resolve_field(source, names::BLOG_TITLE, DEFAULT_BLOG_TITLE),
            footer_text: resolve_field(source, names::BLOG_FOOTER_TEXT, DEFAULT_FOOTER_TEXT),
        }
    }
}

/// Lookup, non-emptiness check, decode, default.
fn resolve_field<S: EnvSource>(source: &S, variable: &'static str, default: &str) -> String {
    match lookup(source, variable) {
        Some(raw) => match decode_value(variable, &raw) {
            Ok(decoded) => decoded,
            Err(err) => {
                warn!(
                    variable,
                    error = %err,
                    "Malformed environment override, using default"
                );
                default.to_string()
            }
        },
        None => default.to_string(),
    }
}

/// A set-but-empty variable is treated as unset.
fn lookup<S: EnvSource>(source: &S, variable: &str) -> Option<String> {
    source.get(variable).filter(|value| !value.is_empty())
}

/// Decode one override, attaching the variable name on failure.
fn decode_value(variable: &'static str, raw: &str) -> Result<String, SiteDataError> {
    decode::percent_decode(raw).map_err(|source| SiteDataError::Decode { variable, source })
}
