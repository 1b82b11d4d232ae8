//! Learn hypotheses from a training set.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use vspace::prelude::*;

use super::load_training_set;
use crate::config::{Config, OutputFormat};

#[derive(Serialize)]
struct LearnReport<'a> {
    training_set: String,
    algorithm: Algorithm,
    attributes: Vec<&'a str>,
    labeled: usize,
    skipped_unlabeled: usize,
    outcome: &'a Outcome,
}

pub fn run(
    file: &str,
    algorithm: Option<Algorithm>,
    width: Option<usize>,
    format: Option<OutputFormat>,
) -> Result<()> {
    let config = Config::load()?;
    let algorithm = algorithm.unwrap_or(config.learner.algorithm);
    let width = width.unwrap_or(config.report.column_width);
    let format = format.unwrap_or(config.report.format);

    let (path, set) = load_training_set(&config, file)?;
    let labeled = set.labeled();
    let counts = set.label_counts();

    let outcome = learn(algorithm, &labeled, set.domain())
        .with_context(|| format!("{} cannot fit {}", algorithm, path.display()))?;

    match format {
        OutputFormat::Json => {
            let report = LearnReport {
                training_set: path.display().to_string(),
                algorithm,
                attributes: set.domain().attributes().iter().map(Attribute::as_str).collect(),
                labeled: labeled.len(),
                skipped_unlabeled: counts.unlabeled,
                outcome: &outcome,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Table => {
            println!(
                "{} {} on {} ({} labeled, {} unlabeled skipped)",
                "→".blue(),
                algorithm.to_string().cyan().bold(),
                path.display().to_string().cyan(),
                labeled.len(),
                counts.unlabeled
            );
            println!();

            if let Outcome::Hypotheses { hypotheses } = &outcome {
                if hypotheses.is_empty() {
                    println!(
                        "{} No hypothesis is consistent with the training data",
                        "•".yellow()
                    );
                    return Ok(());
                }
            }

            print!("{}", render_outcome(&outcome, set.domain(), width)?);
            println!();
            println!("{} {}", "✓".green(), summary(&outcome));
        }
    }

    Ok(())
}

fn summary(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Hypothesis { .. } => "1 hypothesis".to_string(),
        Outcome::Hypotheses { hypotheses } => {
            format!("{} consistent hypotheses", hypotheses.len().to_string().cyan())
        }
        Outcome::VersionSpace { version_space } => format!(
            "{} hypotheses in G, S {}",
            version_space.general().len().to_string().cyan(),
            if version_space.specific().is_unsatisfiable() {
                "accepts nothing yet"
            } else {
                "covers every positive"
            }
        ),
    }
}
