//! `key: value` metadata parsing
//!
//! A content file starts with (or is interleaved with) lines such as
//! `title: My First Post`. Every line matching the metadata pattern becomes a
//! metadata entry and the text after the last such line is the body. Text
//! between two metadata lines is read the same way when it holds a `": "`.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use super::ContentError;
use crate::config::EngineConfig;

/// Pattern matching a whole metadata line, applied in multi-line mode
pub const DEFAULT_MATCH_PARAM: &str = r"^\w+: \b.+$";

lazy_static! {
    static ref DEFAULT_PATTERN: Regex = RegexBuilder::new(DEFAULT_MATCH_PARAM)
        .multi_line(true)
        .build()
        .expect("default metadata pattern is valid");
}

/// Where metadata lines may appear in a file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// Any matching line counts; the body is whatever follows the last one
    #[default]
    Interleaved,
    /// Only a leading block counts; the first other line starts the body
    Head,
}

/// Metadata and body split out of a content file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parsed {
    pub metadata: IndexMap<String, String>,
    pub body: String,
}

/// Splits raw content text into metadata and body
#[derive(Debug, Clone)]
pub struct MetadataParser {
    pattern: Regex,
    mode: ScanMode,
}

impl MetadataParser {
    /// Create a parser from a metadata-line pattern
    pub fn new(pattern: &str, mode: ScanMode) -> Result<Self, ContentError> {
        let pattern = RegexBuilder::new(pattern).multi_line(true).build()?;
        Ok(Self { pattern, mode })
    }

    /// Create a parser from the engine configuration
    pub fn from_config(config: &EngineConfig) -> Result<Self, ContentError> {
        Self::new(&config.match_param, config.metadata_scan)
    }

    /// Split `text` into metadata and body
    pub fn parse(&self, text: &str) -> Parsed {
        let (lines, rest) = match self.mode {
            ScanMode::Interleaved => self.split_interleaved(text),
            ScanMode::Head => self.split_head(text),
        };

        let mut metadata = IndexMap::new();
        for line in lines {
            match line.split_once(": ") {
                Some((name, value)) => {
                    metadata.insert(name.to_lowercase(), value.trim().to_string());
                }
                None => {
                    tracing::warn!("Skipping metadata text without \": \": {:?}", line);
                }
            }
        }

        Parsed {
            metadata,
            body: trim_newlines(rest).to_string(),
        }
    }

    /// Capturing split: every match is kept, and so is every gap between
    /// matches that holds more than newlines. The text after the last match
    /// is the body.
    fn split_interleaved<'a>(&self, text: &'a str) -> (Vec<&'a str>, &'a str) {
        let mut lines = Vec::new();
        let mut last = 0;

        for m in self.pattern.find_iter(text) {
            let gap = trim_newlines(&text[last..m.start()]);
            if !gap.is_empty() {
                lines.push(gap);
            }
            lines.push(m.as_str());
            last = m.end();
        }

        (lines, &text[last..])
    }

    fn split_head<'a>(&self, text: &'a str) -> (Vec<&'a str>, &'a str) {
        let mut lines = Vec::new();
        let mut offset = 0;

        for raw in text.split_inclusive('\n') {
            let line = raw.trim_end_matches('\n');
            if trim_newlines(line).is_empty() {
                offset += raw.len();
                continue;
            }
            match self.pattern.find(line) {
                Some(m) if m.start() == 0 => {
                    lines.push(m.as_str());
                    offset += raw.len();
                }
                _ => break,
            }
        }

        (lines, &text[offset..])
    }
}

impl Default for MetadataParser {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.clone(),
            mode: ScanMode::default(),
        }
    }
}

/// Lowercase and replace spaces with underscores
pub fn normalize_slug(s: &str) -> String {
    s.to_lowercase().replace(' ', "_")
}

fn trim_newlines(s: &str) -> &str {
    s.trim_matches(['\n', '\r'])
}
