//! claude-export - Export Claude conversations to Markdown
//!
//! Entry point for the claude-export CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use claude_export::cli::Cli;
use claude_export::config::Settings;

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Some(shell) = cli.completions {
        claude_export::cli::completions::print(shell);
        return Ok(());
    }

    // Load configuration only when exporting.
    let settings = Settings::load()?;

    claude_export::cli::commands::export_conversation(&settings, cli.claude)?;

    Ok(())
}
