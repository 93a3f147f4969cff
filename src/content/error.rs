//! Content loading errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a [`Page`](super::Page)
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content path does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid metadata pattern: {0}")]
    Pattern(#[from] regex::Error),
}
