//! Configuration module

mod engine;

pub use engine::EngineConfig;
pub use engine::GitConfig;
pub use engine::HighlightConfig;
