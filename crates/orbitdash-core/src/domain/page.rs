//! CMS pages addressed by slug.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Longest slug accepted.
pub const MAX_SLUG_LEN: usize = 128;

/// A stored page. `body` is trusted HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub slug: String,
    pub title: String,
    pub body: String,
    pub updated_at: DateTime<Utc>,
}

/// Page contents to insert or replace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPage {
    pub slug: String,
    pub title: String,
    pub body: String,
}

impl NewPage {
    pub fn new(slug: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Slugs are 1..=128 characters of `a-z`, `0-9`, `-` and `_`.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.len() <= MAX_SLUG_LEN
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_simple_slugs() {
        assert!(is_valid_slug("welcome"));
        assert!(is_valid_slug("mission-2024_notes"));
        assert!(is_valid_slug(&"a".repeat(MAX_SLUG_LEN)));
    }

    #[test]
    fn rejects_everything_else() {
        for slug in [
            "",
            "Welcome",
            "../etc/passwd",
            "a b",
            "станция",
            "page.html",
            "x'; DROP TABLE cms_pages;--",
        ] {
            assert!(!is_valid_slug(slug), "{slug:?} should be rejected");
        }
        assert!(!is_valid_slug(&"a".repeat(MAX_SLUG_LEN + 1)));
    }
}
