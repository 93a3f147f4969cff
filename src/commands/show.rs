//! Show the metadata and slug of a content file

use anyhow::Result;
use std::fmt::Write;
use std::path::Path;

use crate::content::{ContentKind, Page};
use crate::RenderEngine;

/// Describe one content file, as JSON or as plain text
pub fn run<K>(engine: &RenderEngine, path: &Path, kind: &K, json: bool) -> Result<String>
where
    K: ContentKind + ?Sized,
{
    let page = engine.load_page(kind, Some(path))?;
    if json {
        Ok(serde_json::to_string_pretty(&page)?)
    } else {
        Ok(describe(&page))
    }
}

fn describe(page: &Page) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "slug: {}", page.slug());
    let _ = writeln!(out, "category: {}", page.category());
    for (key, value) in page.metadata() {
        let _ = writeln!(out, "  {}: {}", key, value);
    }
    if let Some(body) = page.body() {
        let _ = writeln!(out, "body: {} lines", body.lines().count());
    }
    out
}
