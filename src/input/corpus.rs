//! Reference corpus loading

use crate::error::{Result, RecommenderError};
use crate::input::file_detector::FileType;
use crate::processing::skills::default_reference_corpus;
use log::info;
use std::path::Path;
use tokio::fs;

/// Load a reference corpus: a JSON array of strings, or one document per
/// non-empty line of any other file.
pub async fn load_reference_corpus(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(RecommenderError::InvalidInput(format!(
            "Reference corpus does not exist: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path).await?;
    let corpus = match FileType::from_path(path) {
        FileType::Json => serde_json::from_str::<Vec<String>>(&content)?,
        _ => parse_lines(&content),
    };

    info!("Loaded {} reference documents from {}", corpus.len(), path.display());
    Ok(corpus)
}

/// The configured corpus file, or the built-in skills list
pub async fn resolve_reference_corpus(path: Option<&Path>) -> Result<Vec<String>> {
    match path {
        Some(path) => load_reference_corpus(path).await,
        None => {
            let corpus = default_reference_corpus();
            info!("Using built-in skills corpus ({} documents)", corpus.len());
            Ok(corpus)
        }
    }
}

fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
