//! CLI command implementations

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::conversation::sample_conversation;
use crate::export::{iso_timestamp, sanitize_timestamp, Exporter};

/// Export the built-in conversation, optionally saving a summary for Claude
pub fn export_conversation(settings: &Settings, save_summary: bool) -> Result<()> {
    let now = Utc::now();
    let output_path = transcript_path(settings.conversations_dir(), now);

    let exporter = Exporter::new(settings.projects_dir());
    tracing::debug!(
        "Exporting to {} (projects dir: {})",
        output_path.display(),
        exporter.projects_dir().display()
    );

    let report = exporter
        .export_at(&sample_conversation(), &output_path, save_summary, now)
        .context("Export failed")?;

    println!("Conversation exported to {}", report.transcript_path.display());
    if let Some(path) = report.summary_path {
        println!("Summary saved to {}", path.display());
    }

    Ok(())
}

/// Transcript file for an export started at `now`
fn transcript_path(dir: &Path, now: DateTime<Utc>) -> PathBuf {
    dir.join(format!(
        "conversation-{}.md",
        sanitize_timestamp(&iso_timestamp(now))
    ))
}
