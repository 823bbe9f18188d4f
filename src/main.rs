//! Job recommender: rank job offers against a resume

use clap::Parser;
use job_recommender::cli::{self, Cli, Commands, ConfigAction};
use job_recommender::config::{parse_output_format, Config};
use job_recommender::input::{corpus, jobs, manager::InputManager};
use job_recommender::output::formatter::{resolve_save_path, save_report_to_file, ReportGenerator};
use job_recommender::output::report::RecommendationReport;
use job_recommender::{RecommendationEngine, RecommenderError, Result};
use log::{error, info};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, mut config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Recommend {
            resume,
            jobs: jobs_path,
            threshold,
            fallback,
            corpus: corpus_path,
            output,
            save,
            detailed,
        } => {
            let start_time = Instant::now();

            cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
                .map_err(|e| RecommenderError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&jobs_path, &["json", "jsonl", "ndjson"])
                .map_err(|e| RecommenderError::InvalidInput(format!("Job offers file: {}", e)))?;

            if let Some(threshold) = threshold {
                config.ranking.threshold = threshold;
            }
            if let Some(fallback) = fallback {
                config.ranking.fallback_count = fallback;
            }
            let output_format = match output {
                Some(format) => parse_output_format(&format).map_err(RecommenderError::InvalidInput)?,
                None => config.output.format,
            };

            let corpus_path = corpus_path.or_else(|| config.vocabulary.reference_corpus_path.clone());
            let reference_corpus = corpus::resolve_reference_corpus(corpus_path.as_deref()).await?;
            let engine = RecommendationEngine::from_config(&config, &reference_corpus)?;

            info!("Extracting resume text from {}", resume.display());
            let input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;
            let offers = jobs::load_job_offers(&jobs_path).await?;

            let result = engine.rank(&resume_text, &offers)?;
            let report = RecommendationReport::new(
                resume.to_string_lossy(),
                config.ranking.threshold,
                config.ranking.fallback_count,
                engine.vocabulary()?.len(),
                result,
            )
            .with_processing_time(start_time.elapsed().as_millis() as u64);

            let generator = ReportGenerator::with_options(
                config.output.color_output && save.is_none(),
                detailed || config.output.detailed,
                true,
                true,
            );
            let content = generator.generate_report(&report, &output_format)?;

            match save {
                Some(target) => {
                    let path = resolve_save_path(&target, &output_format, &resume.to_string_lossy());
                    save_report_to_file(&content, &path)?;
                    println!("✅ Report saved to {}", path.display());
                }
                None => println!("{}", content),
            }
        }

        Commands::Vocabulary { corpus: corpus_path, limit } => {
            let corpus_path = corpus_path.or_else(|| config.vocabulary.reference_corpus_path.clone());
            let reference_corpus = corpus::resolve_reference_corpus(corpus_path.as_deref()).await?;
            let engine = RecommendationEngine::from_config(&config, &reference_corpus)?;
            let vocabulary = engine.vocabulary()?;

            println!("📚 Vocabulary: {} terms from {} reference documents\n", vocabulary.len(), vocabulary.document_count());

            let mut terms: Vec<(&str, f64)> = vocabulary.terms().collect();
            terms.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
            for (term, idf) in terms.into_iter().take(limit) {
                println!("  {:<24} idf {:.4}", term, idf);
            }
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration\n");
                    println!("Threshold: {:.2}", config.ranking.threshold);
                    println!("Fallback count: {}", config.ranking.fallback_count);
                    println!("Parallel scoring: {}", config.ranking.parallel);
                    println!("Stopwords: {}", config.normalizer.stopwords.join(", "));
                    match &config.vocabulary.reference_corpus_path {
                        Some(corpus) => println!("Reference corpus: {}", corpus.display()),
                        None => println!("Reference corpus: built-in skills list"),
                    }
                    println!("Output format: {:?}", config.output.format);
                }

                Some(ConfigAction::Path) => println!("{}", path.display()),

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    Config::default().save_to(&path)?;
                    println!("✅ Configuration reset successfully!");
                }

                Some(ConfigAction::Set { key, value }) => {
                    config.set_value(&key, &value)?;
                    config.save_to(&path)?;
                    println!("✅ {} = {}", key, value);
                }
            }
        }
    }

    Ok(())
}
