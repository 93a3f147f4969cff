//! Render a content file to HTML

use anyhow::Result;
use std::path::Path;

use crate::content::ContentKind;
use crate::RenderEngine;

/// Render the body of one content file to HTML
pub fn run<K>(engine: &RenderEngine, path: &Path, kind: &K) -> Result<String>
where
    K: ContentKind + ?Sized,
{
    let page = engine.load_page(kind, Some(path))?;
    let renderer = engine.renderer();
    Ok(page.content(&renderer).into_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Category;
    use std::fs;

    #[test]
    fn test_render_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("hello.md"), "title: Hello\n\n*hi*\n").unwrap();

        let engine = RenderEngine::new(dir.path()).unwrap();
        let html = run(&engine, Path::new("hello.md"), &Category::page()).unwrap();
        assert_eq!(html, "<p><em>hi</em></p>\n");
    }

    #[test]
    fn test_render_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let engine = RenderEngine::new(dir.path()).unwrap();
        let err = run(&engine, Path::new("nope.md"), &Category::page()).unwrap_err();
        assert!(err.to_string().contains("content path does not exist"));
    }
}
