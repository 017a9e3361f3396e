//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::APP_NAME;

/// Environment variable overriding the summary directory
pub const PROJECTS_DIR_ENV: &str = "CLAUDE_EXPORT_PROJECTS_DIR";

/// Main application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Transcript export settings
    #[serde(default)]
    pub export: ExportSettings,

    /// Summary settings
    #[serde(default)]
    pub summary: SummarySettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Directory transcripts are written to (relative paths resolve against
    /// the working directory)
    #[serde(default = "default_conversations_dir")]
    pub conversations_dir: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummarySettings {
    /// Where summaries are saved (defaults to the Claude desktop projects folder)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects_dir: Option<PathBuf>,
}

fn default_conversations_dir() -> PathBuf {
    PathBuf::from("conversations")
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            conversations_dir: default_conversations_dir(),
        }
    }
}

/// Claude projects folder under a home directory.
pub fn claude_projects_dir(home: &Path) -> PathBuf {
    home.join("Library")
        .join("Application Support")
        .join("Claude")
        .join("Projects")
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::debug!("No config file found, using defaults");
            let mut settings = Self::default();
            settings.apply_env_overrides();
            return Ok(settings);
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let mut settings = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        settings.apply_env_overrides();

        Ok(settings)
    }

    /// Parse settings from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var(PROJECTS_DIR_ENV) {
            if !dir.trim().is_empty() {
                self.summary.projects_dir = Some(PathBuf::from(dir));
            }
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", APP_NAME, APP_NAME)
            .context("Could not determine config directory")?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Directory summaries are written to
    pub fn projects_dir(&self) -> PathBuf {
        if let Some(dir) = &self.summary.projects_dir {
            return dir.clone();
        }

        // An unset HOME resolves to a path relative to the working directory.
        let home = std::env::var("HOME").unwrap_or_else(|_| {
            tracing::warn!("HOME is not set; Claude projects folder resolves relative to the working directory");
            String::new()
        });
        claude_projects_dir(Path::new(&home))
    }

    /// Directory transcripts are written to
    pub fn conversations_dir(&self) -> &Path {
        &self.export.conversations_dir
    }
}
