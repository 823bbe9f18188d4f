//! Error handling for the job recommender

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecommenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Vocabulary model required but absent: call fit before transform or rank")]
    VocabularyNotFitted,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, RecommenderError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for RecommenderError {
    fn from(err: anyhow::Error) -> Self {
        RecommenderError::Processing(err.to_string())
    }
}
