//! Content records loaded from `key: value` annotated files

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use super::metadata::{normalize_slug, MetadataParser};
use super::safe::{mark_safe, SafeHtml};
use super::{ContentError, ContentKind, Render};

/// A piece of site content: metadata, a markdown body and a slug
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    /// Source file path, if loaded from disk
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<PathBuf>,

    /// Category name of the content kind
    category: String,

    /// Metadata with lowercased keys
    metadata: IndexMap<String, String>,

    /// Raw markdown body, absent when there was no content source
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<String>,

    /// Identifier used to name and address the page
    slug: String,
}

impl Page {
    /// Build a page, loading `content_path` if one is given. An empty path
    /// counts as no path.
    pub fn load<K>(
        kind: &K,
        content_path: Option<&Path>,
        parser: &MetadataParser,
    ) -> Result<Self, ContentError>
    where
        K: ContentKind + ?Sized,
    {
        match content_path.filter(|p| !p.as_os_str().is_empty()) {
            Some(path) => Self::from_path(kind, path, parser),
            None => Ok(Self::empty(kind)),
        }
    }

    /// Load a page from a file
    pub fn from_path<K>(kind: &K, path: &Path, parser: &MetadataParser) -> Result<Self, ContentError>
    where
        K: ContentKind + ?Sized,
    {
        if !path.exists() {
            return Err(ContentError::NotFound(path.to_path_buf()));
        }

        let text = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut page = Self::parse(kind, &text, parser);
        page.source = Some(path.to_path_buf());
        tracing::debug!(
            "Loaded {:?}: slug={} keys={}",
            path,
            page.slug,
            page.metadata.len()
        );
        Ok(page)
    }

    /// Build a page from in-memory content text
    pub fn parse<K>(kind: &K, text: &str, parser: &MetadataParser) -> Self
    where
        K: ContentKind + ?Sized,
    {
        let parsed = parser.parse(text);
        let slug = derive_slug(&parsed.metadata, kind.category_name());

        Self {
            source: None,
            category: kind.category_name().to_string(),
            metadata: parsed.metadata,
            body: Some(parsed.body),
            slug,
        }
    }

    /// A page without a content source
    pub fn empty<K>(kind: &K) -> Self
    where
        K: ContentKind + ?Sized,
    {
        Self {
            source: None,
            category: kind.category_name().to_string(),
            metadata: IndexMap::new(),
            body: None,
            slug: normalize_slug(kind.category_name()),
        }
    }

    /// Look up a metadata value (keys are case-insensitive)
    pub fn get(&self, key: &str) -> Option<&str> {
        self.metadata.get(&key.to_lowercase()).map(String::as_str)
    }

    pub fn metadata(&self) -> &IndexMap<String, String> {
        &self.metadata
    }

    pub fn title(&self) -> Option<&str> {
        self.get("title")
    }

    /// The `date` metadata parsed as a local date-time
    pub fn date(&self) -> Option<DateTime<Local>> {
        self.get("date").and_then(parse_date_string)
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Render the body to HTML. Re-rendered on every call.
    pub fn html<R>(&self, renderer: &R) -> String
    where
        R: Render + ?Sized,
    {
        match &self.body {
            Some(body) => renderer.render(body),
            None => String::new(),
        }
    }

    /// Rendered body marked safe for template insertion
    pub fn content<R>(&self, renderer: &R) -> SafeHtml
    where
        R: Render + ?Sized,
    {
        mark_safe(self.html(renderer))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.slug)
    }
}

/// Explicit `slug`, then `title`, then the category name
fn derive_slug(metadata: &IndexMap<String, String>, category: &str) -> String {
    let source = metadata
        .get("slug")
        .or_else(|| metadata.get("title"))
        .map(String::as_str)
        .unwrap_or(category);
    normalize_slug(source)
}

/// Parse a date string in various formats
fn parse_date_string(s: &str) -> Option<DateTime<Local>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Local.from_local_datetime(&dt).earliest();
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Local.from_local_datetime(&d.and_hms_opt(0, 0, 0)?).earliest();
        }
    }

    None
}
