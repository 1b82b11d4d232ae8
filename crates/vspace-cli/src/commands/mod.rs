//! CLI command implementations.

pub mod init;
pub mod learn;
pub mod classify;
pub mod validate;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::PathBuf;
use tracing::debug;
use vspace::prelude::*;

use crate::config::Config;

/// Resolve `file` against the config and load it.
pub fn load_training_set(config: &Config, file: &str) -> Result<(PathBuf, TrainingSet)> {
    let path = config.resolve_training_set(file);
    debug!(file, resolved = %path.display(), "resolved training set");
    if !path.exists() {
        bail!(
            "Training set not found: {} (also looked in {})",
            file.cyan(),
            config.learner.training_sets_dir.display()
        );
    }
    let set = TrainingSet::load(&path)
        .with_context(|| format!("Failed to load training set: {}", path.display()))?;
    Ok((path, set))
}
