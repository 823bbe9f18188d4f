//! CLI interface for the job recommender

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "job-recommender")]
#[command(about = "Rank job offers against a resume by TF-IDF similarity")]
#[command(long_about = "Match a resume against a collection of job offers using a fixed skills vocabulary, sublinear TF-IDF weighting and cosine similarity")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recommend job offers for a resume
    Recommend {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job offers file (JSON array or JSON lines)
        #[arg(short, long)]
        jobs: PathBuf,

        /// Minimum similarity for an offer to be matched
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Number of offers shown when nothing is matched
        #[arg(short, long)]
        fallback: Option<usize>,

        /// Reference corpus used to fit the vocabulary
        #[arg(long)]
        corpus: Option<PathBuf>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to a file, or into a directory under a generated name
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Show matched terms and descriptions
        #[arg(short, long)]
        detailed: bool,
    },

    /// Inspect the fitted vocabulary
    Vocabulary {
        /// Reference corpus used to fit the vocabulary
        #[arg(long)]
        corpus: Option<PathBuf>,

        /// Number of highest-idf terms to list
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "ranking.threshold")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
