//! Configuration management for the vspace CLI.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use vspace::prelude::{Algorithm, DEFAULT_COLUMN_WIDTH};

/// Name of the project configuration file.
pub const CONFIG_FILE: &str = "vspace.toml";

/// vspace project configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub learner: LearnerConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnerConfig {
    #[serde(default)]
    pub algorithm: Algorithm,
    /// Where relative training-set paths are looked up when not found as given.
    #[serde(default = "default_training_sets_dir")]
    pub training_sets_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_column_width")]
    pub column_width: usize,
    #[serde(default)]
    pub format: OutputFormat,
}

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed-width tables
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

// Default value functions
fn default_training_sets_dir() -> PathBuf { PathBuf::from("training_sets") }
fn default_column_width() -> usize { DEFAULT_COLUMN_WIDTH }

impl Default for LearnerConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            training_sets_dir: default_training_sets_dir(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            column_width: default_column_width(),
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Load config from vspace.toml in the current or parent directories.
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        match find_config_file(&cwd) {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load config from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Resolve a training-set argument: as given if it exists, otherwise
    /// inside the configured training-sets directory.
    pub fn resolve_training_set(&self, file: &str) -> PathBuf {
        let direct = PathBuf::from(file);
        if direct.exists() || direct.is_absolute() {
            return direct;
        }
        let in_sets_dir = self.learner.training_sets_dir.join(file);
        if in_sets_dir.exists() {
            in_sets_dir
        } else {
            direct
        }
    }
}

/// Find vspace.toml in `start` or its parent directories.
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}
