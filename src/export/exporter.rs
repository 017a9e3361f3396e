//! Writes transcripts and summaries to disk

use chrono::{DateTime, Local, Utc};
use std::path::{Path, PathBuf};

use crate::conversation::Message;
use crate::export::summary::{generate_summary_at, render_summary};
use crate::export::transcript::format_conversation;
use crate::{ExportError, Result};

/// Files produced by one export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub transcript_path: PathBuf,
    pub summary_path: Option<PathBuf>,
}

/// Exports conversations, saving summaries under `projects_dir`
#[derive(Debug, Clone)]
pub struct Exporter {
    projects_dir: PathBuf,
}

impl Exporter {
    pub fn new(projects_dir: impl Into<PathBuf>) -> Self {
        Self {
            projects_dir: projects_dir.into(),
        }
    }

    pub fn projects_dir(&self) -> &Path {
        &self.projects_dir
    }

    /// Write the transcript to `output_path` and, if `save_summary` is set,
    /// a summary into the projects directory.
    pub fn export(
        &self,
        messages: &[Message],
        output_path: &Path,
        save_summary: bool,
    ) -> Result<ExportReport> {
        self.export_at(messages, output_path, save_summary, Utc::now())
    }

    /// Same as [`Exporter::export`] with an explicit clock.
    pub fn export_at(
        &self,
        messages: &[Message],
        output_path: &Path,
        save_summary: bool,
        now: DateTime<Utc>,
    ) -> Result<ExportReport> {
        let markdown = format_conversation(messages, &now.with_timezone(&Local));
        write_file(output_path, &markdown)?;
        tracing::debug!("Conversation exported to {}", output_path.display());

        let summary_path = if save_summary {
            let summary = generate_summary_at(messages, now);
            let content = render_summary(&summary);

            let path = self.projects_dir.join(summary.file_name());
            write_file(&path, &content)?;
            tracing::debug!("Summary saved to {}", path.display());
            Some(path)
        } else {
            None
        };

        Ok(ExportReport {
            transcript_path: output_path.to_path_buf(),
            summary_path,
        })
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ExportError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    std::fs::write(path, content).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}
