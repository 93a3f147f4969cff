//! Engine configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::content::{ScanMode, DEFAULT_MATCH_PARAM};

/// Main engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // Directory
    pub content_dir: String,

    // Metadata
    pub match_param: String,
    pub metadata_scan: ScanMode,

    // Rendering
    #[serde(default)]
    pub highlight: HighlightConfig,

    // History
    #[serde(default)]
    pub git: GitConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            content_dir: "content".to_string(),
            match_param: DEFAULT_MATCH_PARAM.to_string(),
            metadata_scan: ScanMode::default(),
            highlight: HighlightConfig::default(),
            git: GitConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: EngineConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded config from {:?}", path.as_ref());
        Ok(config)
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enable: bool,
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enable: true,
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}

/// Defaults for the `git-date` lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Revision the history is scoped to; empty means the current HEAD
    pub branch: String,
    pub message: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            branch: "origin/master".to_string(),
            message: String::new(),
        }
    }
}
