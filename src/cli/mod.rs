//! CLI module for claude-export
//!
//! Contains argument parsing and the export command.

pub mod args;
pub mod commands;
pub mod completions;

pub use args::Cli;
