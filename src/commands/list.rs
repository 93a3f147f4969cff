//! List site content

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::content::ContentKind;
use crate::RenderEngine;

/// List every page in the content directory as `slug [source]` lines
pub fn run<K>(engine: &RenderEngine, kind: &K) -> Result<Vec<String>>
where
    K: ContentKind + ?Sized,
{
    let loader = ContentLoader::new(engine)?;
    let pages = loader.load_pages(kind)?;

    Ok(pages
        .iter()
        .map(|page| {
            let source = page
                .source()
                .map(|p| p.strip_prefix(&engine.content_dir).unwrap_or(p))
                .map(|p| p.to_string_lossy().to_string())
                .unwrap_or_default();
            format!("{} [{}]", page.slug(), source)
        })
        .collect())
}
