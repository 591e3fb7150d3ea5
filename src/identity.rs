//! Site Identity Record
//!
//! The three-field record handed to the renderer as template data. Constructed
//! fresh on each resolution, never cached or mutated afterwards.

use serde::{Deserialize, Serialize};

/// Default site operator name when `BLOG_NAME` is unset or empty.
pub const DEFAULT_NAME: &str = "PowctoRhan";

/// Default blog title when `BLOG_TITLE` is unset or empty.
pub const DEFAULT_BLOG_TITLE: &str = "Learing Notes";

/// Default footer text when `BLOG_FOOTER_TEXT` is unset or empty.
pub const DEFAULT_FOOTER_TEXT: &str = "DRIVEN BY PASSION";

/// Resolved site identity.
///
/// Every field is always present and non-empty: either a decoded environment
/// override or the fixed default for that field. Serialized field names are
/// the renderer-facing camelCase ones (`name`, `blogTitle`, `footerText`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteIdentity {
    /// Site operator / author name
    pub name: String,

    /// Blog title shown in the page header
    pub blog_title: String,

    /// Footer text
    pub footer_text: String,
}

impl Default for SiteIdentity {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            blog_title: DEFAULT_BLOG_TITLE.to_string(),
            footer_text: DEFAULT_FOOTER_TEXT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_identity() {
        let identity = SiteIdentity::default();
        assert_eq!(identity.name, "PowctoRhan");
        assert_eq!(identity.blog_title, "Learing Notes");
        assert_eq!(identity.footer_text, "DRIVEN BY PASSION");
    }

    #[test]
    fn test_serialized_field_names_are_camel_case() {
        let value = serde_json::to_value(SiteIdentity::default()).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("name"));
        assert!(object.contains_key("blogTitle"));
        assert!(object.contains_key("footerText"));
        assert_eq!(object.len(), 3);
    }

    #[test]
    fn test_round_trips_through_serde() {
        let identity = SiteIdentity {
            name: "someone".to_string(),
            blog_title: "notes".to_string(),
            footer_text: "footer".to_string(),
        };
        let json = serde_json::to_string(&identity).unwrap();
        let back: SiteIdentity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, identity);
    }
}
