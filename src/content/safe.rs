//! Markup marked as safe for direct template insertion

use serde::Serialize;
use std::fmt;

/// Rendered HTML that a templating layer should insert without escaping.
///
/// This is a tag only; the wrapped markup is never escaped or sanitized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SafeHtml(String);

impl SafeHtml {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Mark rendered HTML as safe
pub fn mark_safe(html: impl Into<String>) -> SafeHtml {
    SafeHtml(html.into())
}

impl fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SafeHtml {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<SafeHtml> for String {
    fn from(html: SafeHtml) -> Self {
        html.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_safe_keeps_markup_verbatim() {
        let html = mark_safe("<p>a & b</p>");
        assert_eq!(html.as_str(), "<p>a & b</p>");
        assert_eq!(html.to_string(), "<p>a & b</p>");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&mark_safe("<em>x</em>")).unwrap();
        assert_eq!(json, r#""<em>x</em>""#);
    }
}
