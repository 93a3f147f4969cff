//! Git history helpers
//!
//! Looks up the date a file first or last appears in `git log`.

use chrono::{DateTime, FixedOffset};
use std::path::Path;
use std::process::Command;
use std::str::FromStr;
use thiserror::Error;

/// Format of `%ad` with git's default date style
const GIT_DATE_FORMAT: &str = "%a %b %e %H:%M:%S %Y %z";

/// Git lookup errors
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to run git: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("git log failed ({status:?}): {stderr}")]
    Failed { status: Option<i32>, stderr: String },
}

/// Which end of the log to take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// First line of the output (most recent commit)
    Head,
    /// Last line of the output (oldest commit)
    Tail,
}

impl Position {
    fn pick(self, output: &str) -> Option<&str> {
        let mut lines = output.lines().filter(|l| !l.is_empty());
        match self {
            Position::Head => lines.next(),
            Position::Tail => lines.last(),
        }
    }
}

impl FromStr for Position {
    type Err = GitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "head" => Ok(Position::Head),
            "tail" => Ok(Position::Tail),
            other => Err(GitError::InvalidArgument(format!(
                "position must be \"head\" or \"tail\", got {:?}",
                other
            ))),
        }
    }
}

/// Run `git log` for `filepath` and return the first or last formatted line.
///
/// Each line reads `"<message> <date>"`. The date is left unparsed; see
/// [`parse_log_date`]. Returns `Ok(None)` when the file has no history.
pub fn log_date<P: AsRef<Path>>(
    filepath: P,
    position: &str,
    branch: Option<&str>,
    message: &str,
) -> Result<Option<String>, GitError> {
    let position: Position = position.parse()?;
    let filepath = filepath.as_ref();

    let output = log_command(filepath, branch, message)
        .output()
        .map_err(GitError::Spawn)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GitError::Failed {
            status: output.status.code(),
            stderr: stderr.trim().to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let line = position.pick(&stdout).map(str::to_string);
    tracing::debug!("git log {:?} ({:?}): {:?}", filepath, position, line);
    Ok(line)
}

/// Build the `git log` invocation without running it
pub fn log_command(filepath: &Path, branch: Option<&str>, message: &str) -> Command {
    let mut cmd = Command::new("git");
    cmd.arg("log").arg(format!("--format={} %ad", message));
    if let Some(branch) = branch.filter(|b| !b.is_empty()) {
        // a revision starting with '-' must not be read as an option
        cmd.arg("--end-of-options").arg(branch);
    }
    cmd.arg("--").arg(filepath);

    // Absolute paths may live in another repository than the process cwd
    if filepath.is_absolute() {
        if let Some(parent) = filepath.parent() {
            cmd.current_dir(parent);
        }
    }

    cmd.env_remove("GIT_DIR").env_remove("GIT_WORK_TREE");
    cmd
}

/// Parse the date out of a line returned by [`log_date`]
pub fn parse_log_date(line: &str, message: &str) -> Option<DateTime<FixedOffset>> {
    let date = line.trim().strip_prefix(message.trim()).unwrap_or(line).trim();

    DateTime::parse_from_str(date, GIT_DATE_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc2822(date))
        .or_else(|_| DateTime::parse_from_rfc3339(date))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    fn args(cmd: &Command) -> Vec<&OsStr> {
        cmd.get_args().collect()
    }

    #[test]
    fn test_log_command_with_branch() {
        let cmd = log_command(Path::new("README.md"), Some("main"), "Created:");
        assert_eq!(cmd.get_program(), "git");
        assert_eq!(
            args(&cmd),
            vec![
                "log",
                "--format=Created: %ad",
                "--end-of-options",
                "main",
                "--",
                "README.md"
            ]
        );
        assert!(cmd.get_current_dir().is_none());
    }

    #[test]
    fn test_log_command_branch_like_option_stays_revision() {
        let cmd = log_command(Path::new("README.md"), Some("--output=/tmp/x"), "");
        let args = args(&cmd);
        let end = args.iter().position(|a| *a == "--end-of-options").unwrap();
        assert_eq!(args[end + 1], "--output=/tmp/x");
        assert_eq!(&args[end + 2..], ["--", "README.md"]);
    }

    #[test]
    fn test_log_command_without_branch() {
        for branch in [None, Some("")] {
            let cmd = log_command(Path::new("README.md"), branch, "");
            assert_eq!(args(&cmd), vec!["log", "--format= %ad", "--", "README.md"]);
        }
    }

    #[test]
    fn test_log_command_absolute_path_runs_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("post.md");
        let cmd = log_command(&file, Some("origin/master"), "");
        assert_eq!(cmd.get_current_dir(), Some(dir.path()));
    }

    #[test]
    fn test_invalid_position_rejected() {
        let err = log_date("README.md", "first", Some("main"), "Created:").unwrap_err();
        assert!(matches!(err, GitError::InvalidArgument(_)));
        assert!(err.to_string().contains("first"));
    }

    #[test]
    fn test_position_parse() {
        assert_eq!("head".parse::<Position>().unwrap(), Position::Head);
        assert_eq!("tail".parse::<Position>().unwrap(), Position::Tail);
        assert!("HEAD".parse::<Position>().is_err());
    }

    #[test]
    fn test_position_pick() {
        let output = "Created: newest\nCreated: middle\nCreated: oldest\n";
        assert_eq!(Position::Head.pick(output), Some("Created: newest"));
        assert_eq!(Position::Tail.pick(output), Some("Created: oldest"));
        assert_eq!(Position::Head.pick(""), None);
    }

    #[test]
    fn test_parse_log_date() {
        let dt = parse_log_date("Created: Tue Jan 15 10:30:00 2019 -0800", "Created:").unwrap();
        assert_eq!(dt.to_rfc3339(), "2019-01-15T10:30:00-08:00");

        let dt = parse_log_date(" Tue Jan 15 10:30:00 2019 +0000", "").unwrap();
        assert_eq!(dt.format("%Y-%m-%d").to_string(), "2019-01-15");

        assert!(parse_log_date("Created: yesterday", "Created:").is_none());
    }
}
