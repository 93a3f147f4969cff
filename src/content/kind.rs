//! Content kinds

use serde::{Deserialize, Serialize};
use std::fmt;

/// A kind of content (page, post, ...).
///
/// The category name is the slug of last resort for a record that carries
/// neither `slug` nor `title` metadata.
pub trait ContentKind {
    fn category_name(&self) -> &str;
}

/// A content kind identified by its category name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Standalone page
    pub fn page() -> Self {
        Self::new("Page")
    }

    /// Blog post
    pub fn post() -> Self {
        Self::new("Post")
    }
}

impl ContentKind for Category {
    fn category_name(&self) -> &str {
        &self.0
    }
}

impl ContentKind for str {
    fn category_name(&self) -> &str {
        self
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}
