//! Initialize a new vspace project.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::config::{Config, CONFIG_FILE};

const SAMPLE_NAME: &str = "enjoy_sport.yaml";

const SAMPLE_TRAINING_SET: &str = "\
# Days on which the water sport was enjoyed.
domain:
  Sky: [Sunny, Cloudy, Rainy]
  AirTemp: [Warm, Cold]
  Humidity: [Normal, High]
  Wind: [Strong, Weak]
  Water: [Warm, Cool]
  Forecast: [Same, Change]
instances:
  - {Sky: Sunny, AirTemp: Warm, Humidity: Normal, Wind: Strong, Water: Warm, Forecast: Same, label: true}
  - {Sky: Sunny, AirTemp: Warm, Humidity: High, Wind: Strong, Water: Warm, Forecast: Same, label: true}
  - {Sky: Rainy, AirTemp: Cold, Humidity: High, Wind: Strong, Water: Warm, Forecast: Change, label: false}
  - {Sky: Sunny, AirTemp: Warm, Humidity: High, Wind: Strong, Water: Cool, Forecast: Change, label: true}
  - {Sky: Sunny, AirTemp: Warm, Humidity: Normal, Wind: Weak, Water: Warm, Forecast: Same}
  - {Sky: Rainy, AirTemp: Cold, Humidity: Normal, Wind: Weak, Water: Warm, Forecast: Same}
  - {Sky: Cloudy, AirTemp: Warm, Humidity: Normal, Wind: Strong, Water: Warm, Forecast: Same}
";

pub fn run(path: Option<String>) -> Result<()> {
    let base_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    println!("{} Initializing vspace project...", "→".blue());
    let config = scaffold(&base_path)?;

    println!();
    println!("{} vspace project initialized!", "✓".green().bold());
    println!();
    println!("Next steps:");
    println!("  {} vspace validate {}", "1.".blue(), SAMPLE_NAME);
    println!("  {} vspace learn {}", "2.".blue(), SAMPLE_NAME);
    println!("  {} vspace classify {}", "3.".blue(), SAMPLE_NAME);
    println!(
        "  {} add your own training sets to {}",
        "4.".blue(),
        config.learner.training_sets_dir.display()
    );

    Ok(())
}

/// Create the config file, training-sets directory and sample set under
/// `base_path`, leaving existing files alone.
fn scaffold(base_path: &Path) -> Result<Config> {
    // Create default config
    let config_path = base_path.join(CONFIG_FILE);
    let config = if !config_path.exists() {
        let config = Config::default();
        config.save(&config_path)?;
        println!("  {} Created {}", "✓".green(), config_path.display());
        config
    } else {
        println!("  {} {} already exists", "•".yellow(), config_path.display());
        Config::load_from(&config_path)?
    };

    // Create training sets directory
    let sets_dir = base_path.join(&config.learner.training_sets_dir);
    std::fs::create_dir_all(&sets_dir)
        .with_context(|| format!("Failed to create {}", sets_dir.display()))?;
    println!("  {} Created {}", "✓".green(), sets_dir.display());

    // Create sample training set
    let sample_path = sets_dir.join(SAMPLE_NAME);
    if !sample_path.exists() {
        std::fs::write(&sample_path, SAMPLE_TRAINING_SET)
            .with_context(|| format!("Failed to write {}", sample_path.display()))?;
        println!("  {} Created {}", "✓".green(), sample_path.display());
    }

    Ok(config)
}
