//! Look up a file's date in git history

use anyhow::Result;
use std::path::Path;

use crate::git;
use crate::RenderEngine;

/// Print the first or last `git log` line for a file.
///
/// `branch` and `message` fall back to the `git` section of the config.
pub fn run(
    engine: &RenderEngine,
    path: &Path,
    position: &str,
    branch: Option<&str>,
    message: Option<&str>,
) -> Result<Option<String>> {
    let branch = branch.unwrap_or(&engine.config.git.branch);
    let message = message.unwrap_or(&engine.config.git.message);
    let path = engine.resolve(path);

    let line = git::log_date(&path, position, Some(branch), message)?;
    if line.is_none() {
        tracing::info!("No history for {:?} on {}", path, branch);
    }
    Ok(line)
}
