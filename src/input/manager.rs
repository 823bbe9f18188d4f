//! Input manager for extracting resume text from different file types

use crate::error::{Result, RecommenderError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use log::info;
use std::path::Path;

#[derive(Default)]
pub struct InputManager {
    markdown: MarkdownExtractor,
}

impl InputManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn extract_text(&self, path: &Path) -> Result<String> {
        let file_type = FileType::from_path(path);
        if !file_type.is_document() {
            return Err(RecommenderError::UnsupportedFormat(format!(
                "Unsupported resume file type for: {}",
                path.display()
            )));
        }

        if !path.exists() {
            return Err(RecommenderError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                self.markdown.extract(path).await
            }
            _ => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await
            }
        }
    }
}
