//! Check a training set and summarize it.

use anyhow::Result;
use colored::Colorize;
use vspace::prelude::*;

use super::load_training_set;
use crate::config::Config;

pub fn run(file: &str) -> Result<()> {
    let config = Config::load()?;
    let (path, set) = load_training_set(&config, file)?;
    let counts = set.label_counts();
    let domain = set.domain();

    println!("{}", "Training Set".white().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!("  File:              {}", path.display().to_string().cyan());
    println!();

    println!("{}", "Domain".blue().bold());
    for (attribute, values) in domain.iter() {
        let values: Vec<&str> = values.iter().map(Value::as_str).collect();
        println!("  {:<18} {}", format!("{}:", attribute), values.join(", "));
    }
    println!(
        "  Hypothesis space:  {}",
        domain.hypothesis_space_size().to_string().cyan()
    );
    println!();

    println!("{}", "Instances".blue().bold());
    println!("  Positive:          {}", counts.positive.to_string().green());
    println!("  Negative:          {}", counts.negative.to_string().red());
    println!("  Unlabeled:         {}", counts.unlabeled.to_string().yellow());
    println!();

    match candidate_elimination(&set.labeled(), domain) {
        Ok(_) => println!(
            "{} Labels are consistent with a conjunctive concept",
            "✓".green()
        ),
        Err(inconsistency) => println!("{} {}", "✗".red(), inconsistency),
    }
    println!("{}", "═".repeat(40).dimmed());

    Ok(())
}
