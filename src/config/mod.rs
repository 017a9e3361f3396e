//! Configuration module for claude-export
//!
//! Loads optional settings from a TOML file, with environment overrides.

mod settings;

pub use settings::{claude_projects_dir, Settings, PROJECTS_DIR_ENV};
