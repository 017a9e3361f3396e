//! claude-export - Export Claude conversations to Markdown
//!
//! Renders a conversation as a Markdown transcript and, optionally, a short
//! context summary that can be dropped into a Claude project folder.

pub mod cli;
pub mod config;
pub mod conversation;
pub mod export;

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for claude-export
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ExportError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "claude-export";
