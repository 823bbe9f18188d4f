//! Configuration management for the job recommender

use crate::error::{Result, RecommenderError};
use crate::processing::normalizer::{default_stopwords, TextNormalizer};
use crate::processing::ranker::{RankingSettings, DEFAULT_FALLBACK_COUNT, DEFAULT_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Missing sections and keys fall back to their defaults
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ranking: RankingConfig,
    pub normalizer: NormalizerConfig,
    pub vocabulary: VocabularyConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    pub threshold: f64,
    pub fallback_count: usize,
    pub parallel: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    pub stopwords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Reference corpus file; the built-in skills list is used when unset
    pub reference_corpus_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            fallback_count: DEFAULT_FALLBACK_COUNT,
            parallel: true,
        }
    }
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            stopwords: default_stopwords(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults on first use
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| RecommenderError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| RecommenderError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("job-recommender")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        let threshold = self.ranking.threshold;
        if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
            return Err(RecommenderError::Configuration(format!(
                "ranking.threshold must be between 0 and 1, got {}",
                threshold
            )));
        }
        Ok(())
    }

    pub fn ranking_settings(&self) -> RankingSettings {
        RankingSettings {
            threshold: self.ranking.threshold,
            fallback_count: self.ranking.fallback_count,
            parallel: self.ranking.parallel,
        }
    }

    pub fn normalizer(&self) -> TextNormalizer {
        TextNormalizer::new(&self.normalizer.stopwords)
    }

    /// Set a single value by dotted key, e.g. `ranking.threshold`
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = |e: &dyn std::fmt::Display| {
            RecommenderError::Configuration(format!("Invalid value '{}' for {}: {}", value, key, e))
        };

        let mut updated = self.clone();
        match key {
            "ranking.threshold" => updated.ranking.threshold = value.parse().map_err(|e| invalid(&e))?,
            "ranking.fallback_count" => updated.ranking.fallback_count = value.parse().map_err(|e| invalid(&e))?,
            "ranking.parallel" => updated.ranking.parallel = value.parse().map_err(|e| invalid(&e))?,
            "vocabulary.reference_corpus_path" => {
                updated.vocabulary.reference_corpus_path = match value.trim() {
                    "" | "none" => None,
                    path => Some(PathBuf::from(path)),
                }
            }
            "output.format" => updated.output.format = parse_output_format(value).map_err(|e| invalid(&e))?,
            "output.detailed" => updated.output.detailed = value.parse().map_err(|e| invalid(&e))?,
            "output.color_output" => updated.output.color_output = value.parse().map_err(|e| invalid(&e))?,
            _ => {
                return Err(RecommenderError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }

        updated.validate()?;
        *self = updated;
        Ok(())
    }
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> std::result::Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
    }
}
