//! Classify unlabeled instances with the learned version space.

use anyhow::{Context, Result};
use colored::Colorize;
use vspace::prelude::*;

use super::load_training_set;
use crate::config::Config;

pub fn run(file: &str) -> Result<()> {
    let config = Config::load()?;
    let (path, set) = load_training_set(&config, file)?;

    let space = candidate_elimination(&set.labeled(), set.domain())
        .with_context(|| format!("Cannot build a version space for {}", path.display()))?;

    let unlabeled: Vec<&Instance> = set.unlabeled().collect();
    if unlabeled.is_empty() {
        println!(
            "{} {} has no unlabeled instances",
            "•".yellow(),
            path.display().to_string().cyan()
        );
        return Ok(());
    }

    println!(
        "{} Classifying {} instances from {}",
        "→".blue(),
        unlabeled.len().to_string().cyan(),
        path.display().to_string().cyan()
    );
    println!();

    let mut undecided = 0;
    for (i, instance) in unlabeled.iter().enumerate() {
        let verdict = space.classify(instance);
        let shown = match verdict {
            Verdict::Positive => verdict.to_string().green(),
            Verdict::Negative => verdict.to_string().red(),
            Verdict::Undecided => {
                undecided += 1;
                verdict.to_string().yellow()
            }
        };
        let values: Vec<String> = instance
            .values()
            .map(|(attribute, value)| format!("{}:{}", attribute, value))
            .collect();
        println!(
            "  {} {} {}",
            format!("{}.", i + 1).blue(),
            shown.bold(),
            values.join(" ").dimmed()
        );
    }

    println!();
    if undecided > 0 {
        println!(
            "{} {} instances need more training data to decide",
            "•".yellow(),
            undecided.to_string().cyan()
        );
    } else {
        println!("{} Every instance was decided", "✓".green());
    }

    Ok(())
}
