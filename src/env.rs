//! Environment Variable Names and Sources
//!
//! Centralizes the closed set of recognized variable names and the source
//! abstraction that lets resolution run against either the real process
//! environment or an in-memory map in tests. All environment reads in this
//! crate go through [`EnvSource`] rather than `std::env::var()` directly.

use std::collections::HashMap;

/// Recognized environment variable names
pub mod names {
    /// Site operator name: `BLOG_NAME`
    pub const BLOG_NAME: &str = "BLOG_NAME";

    /// Blog title: `BLOG_TITLE`
    pub const BLOG_TITLE: &str = "BLOG_TITLE";

    /// Footer text: `BLOG_FOOTER_TEXT`
    pub const BLOG_FOOTER_TEXT: &str = "BLOG_FOOTER_TEXT";
}

/// A read-only mapping from variable name to optional string value.
pub trait EnvSource {
    /// Look up a variable. `None` means the variable is not set.
    fn get(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// An in-memory source for deterministic resolution without mutating the
/// process environment.
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    values: HashMap<String, String>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, replacing any previous value for the same name.
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.values.insert(name.to_string(), value.to_string());
        self
    }
}

impl EnvSource for MapSource {
    fn get(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}
