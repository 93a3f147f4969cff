//! Content module - pages, metadata parsing and markdown rendering

mod error;
mod kind;
pub mod loader;
mod markdown;
mod metadata;
mod page;
mod safe;

pub use error::ContentError;
pub use kind::{Category, ContentKind};
pub use markdown::{MarkdownRenderer, Render};
pub use metadata::{normalize_slug, MetadataParser, Parsed, ScanMode, DEFAULT_MATCH_PARAM};
pub use page::Page;
pub use safe::{mark_safe, SafeHtml};
