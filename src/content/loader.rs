//! Content loader - loads every page in the content directory

use anyhow::Result;
use std::path::Path;
use walkdir::WalkDir;

use super::{ContentKind, MetadataParser, Page};
use crate::RenderEngine;

/// Loads content from the content directory
pub struct ContentLoader<'a> {
    engine: &'a RenderEngine,
    parser: MetadataParser,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(engine: &'a RenderEngine) -> Result<Self> {
        let parser = engine.parser()?;
        Ok(Self { engine, parser })
    }

    /// Load all content files as pages of one kind, sorted by source path
    pub fn load_pages<K>(&self, kind: &K) -> Result<Vec<Page>>
    where
        K: ContentKind + ?Sized,
    {
        let content_dir = &self.engine.content_dir;
        if !content_dir.exists() {
            tracing::debug!("Content directory {:?} does not exist", content_dir);
            return Ok(Vec::new());
        }

        let mut pages = Vec::new();

        for entry in WalkDir::new(content_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_content_file(path) {
                match Page::from_path(kind, path, &self.parser) {
                    Ok(page) => pages.push(page),
                    Err(e) => {
                        tracing::warn!("Failed to load page {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Loaded {} pages from {:?}", pages.len(), content_dir);

        Ok(pages)
    }
}

/// Check if a file is a markdown or HTML content file
fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| matches!(e, "md" | "markdown" | "html"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Category;
    use std::fs;

    #[test]
    fn test_load_pages_from_content_dir() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content");
        fs::create_dir_all(content.join("nested")).unwrap();
        fs::write(content.join("b.md"), "title: Second Page\n\nbody").unwrap();
        fs::write(content.join("a.md"), "title: First Page\n\nbody").unwrap();
        fs::write(content.join("nested/c.html"), "<p>raw html</p>").unwrap();
        fs::write(content.join("notes.txt"), "title: Ignored\n").unwrap();

        let engine = RenderEngine::new(dir.path()).unwrap();
        let loader = ContentLoader::new(&engine).unwrap();
        let pages = loader.load_pages(&Category::page()).unwrap();

        let slugs: Vec<&str> = pages.iter().map(|p| p.slug()).collect();
        assert_eq!(slugs, vec!["first_page", "second_page", "page"]);
    }

    #[test]
    fn test_missing_content_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let engine = RenderEngine::new(dir.path()).unwrap();
        let loader = ContentLoader::new(&engine).unwrap();
        assert!(loader.load_pages(&Category::post()).unwrap().is_empty());
    }

    #[test]
    fn test_is_content_file() {
        assert!(is_content_file(Path::new("post.md")));
        assert!(is_content_file(Path::new("post.markdown")));
        assert!(is_content_file(Path::new("page.html")));
        assert!(!is_content_file(Path::new("image.png")));
        assert!(!is_content_file(Path::new("README")));
    }
}
