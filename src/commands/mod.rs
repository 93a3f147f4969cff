//! CLI command implementations

pub mod git_date;
pub mod list;
pub mod render;
pub mod show;
