//! vspace CLI - Command-line interface for version-space concept learning.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;
use vspace::prelude::Algorithm;

use crate::config::OutputFormat;

#[derive(Parser)]
#[command(name = "vspace")]
#[command(author, version, about = "vspace - Version-space concept learning", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new vspace project
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Learn hypotheses from a training set
    Learn {
        /// Training set file (YAML or JSON)
        file: String,

        /// Learner: find-s, list-then-eliminate or candidate-elimination
        #[arg(short, long)]
        algorithm: Option<Algorithm>,

        /// Column width of the hypothesis table
        #[arg(short, long)]
        width: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Classify the unlabeled instances of a training set
    Classify {
        /// Training set file (YAML or JSON)
        file: String,
    },

    /// Check a training set and summarize it
    Validate {
        /// Training set file (YAML or JSON)
        file: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Learn { file, algorithm, width, format } => {
            commands::learn::run(&file, algorithm, width, format)
        }
        Commands::Classify { file } => commands::classify::run(&file),
        Commands::Validate { file } => commands::validate::run(&file),
    }
}
