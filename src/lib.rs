//! render-engine: content loading for a static site generator
//!
//! Content files carry `key: value` metadata lines followed by a markdown
//! body. This crate splits the two, derives a slug for each page and renders
//! the body to HTML on demand.

pub mod commands;
pub mod config;
pub mod content;
pub mod git;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{ContentKind, MarkdownRenderer, MetadataParser, Page};

/// The render engine application
#[derive(Clone)]
pub struct RenderEngine {
    /// Engine configuration
    pub config: config::EngineConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content directory
    pub content_dir: PathBuf,
}

impl RenderEngine {
    /// Create a new engine from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::EngineConfig::load(&config_path)?
        } else {
            config::EngineConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
        })
    }

    /// Metadata parser built from the configured pattern
    pub fn parser(&self) -> Result<MetadataParser> {
        Ok(MetadataParser::from_config(&self.config)?)
    }

    /// Markdown renderer built from the highlight settings
    pub fn renderer(&self) -> MarkdownRenderer {
        MarkdownRenderer::from_config(&self.config.highlight)
    }

    /// Resolve a path against the base directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// Load a single page of the given kind
    pub fn load_page<K>(&self, kind: &K, path: Option<&Path>) -> Result<Page>
    where
        K: ContentKind + ?Sized,
    {
        let parser = self.parser()?;
        let path = path
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| self.resolve(p));
        Ok(Page::load(kind, path.as_deref(), &parser)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Category, ScanMode};
    use std::fs;

    #[test]
    fn test_engine_defaults_without_config() {
        let dir = tempfile::tempdir().unwrap();
        let engine = RenderEngine::new(dir.path()).unwrap();
        assert_eq!(engine.content_dir, dir.path().join("content"));
        assert_eq!(engine.config.metadata_scan, ScanMode::Interleaved);
    }

    #[test]
    fn test_engine_loads_relative_page() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("_config.yml"),
            "content_dir: pages\nmetadata_scan: head\n",
        )
        .unwrap();
        fs::write(dir.path().join("about.md"), "title: About Us\n\nHello\n").unwrap();

        let engine = RenderEngine::new(dir.path()).unwrap();
        assert_eq!(engine.content_dir, dir.path().join("pages"));

        let page = engine
            .load_page(&Category::page(), Some(Path::new("about.md")))
            .unwrap();
        assert_eq!(page.slug(), "about_us");
        assert_eq!(page.html(&engine.renderer()), "<p>Hello</p>\n");
    }

    #[test]
    fn test_engine_empty_path_loads_pathless_page() {
        let dir = tempfile::tempdir().unwrap();
        let engine = RenderEngine::new(dir.path()).unwrap();

        let page = engine
            .load_page(&Category::post(), Some(Path::new("")))
            .unwrap();
        assert_eq!(page.source(), None);
        assert_eq!(page.body(), None);
        assert_eq!(page.slug(), "post");
    }

    #[test]
    fn test_engine_rejects_bad_pattern() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("_config.yml"), "match_param: '(oops'\n").unwrap();

        let engine = RenderEngine::new(dir.path()).unwrap();
        assert!(engine.parser().is_err());
    }
}
