//! Text extraction from various file formats

use crate::error::{Result, RecommenderError};
use pulldown_cmark::{html, Parser};
use regex::Regex;
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            RecommenderError::PdfExtraction(format!("Failed to extract text from PDF '{}': {}", path.display(), e))
        })?;
        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path).await?)
    }
}

pub struct MarkdownExtractor {
    tag_regex: Regex,
}

impl Default for MarkdownExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownExtractor {
    pub fn new() -> Self {
        Self {
            tag_regex: Regex::new(r"<[^>]*>").expect("Invalid tag regex"),
        }
    }

    /// Render markdown and strip the resulting markup
    pub fn to_text(&self, markdown: &str) -> String {
        let parser = Parser::new(markdown);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        let text = html_output.replace("<br>", "\n").replace("</p>", "</p>\n\n");

        // Entities are decoded after tag removal so escaped brackets survive
        let clean_text = self
            .tag_regex
            .replace_all(&text, "")
            .replace("&nbsp;", " ")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&");

        clean_text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        Ok(self.to_text(&markdown_content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_to_text() {
        let text = MarkdownExtractor::new().to_text("# Jane Doe\n\n**Skills**: Python & SQL\n\n- Docker\n- Rust");
        assert!(text.contains("Jane Doe"));
        assert!(text.contains("Python & SQL"));
        assert!(text.contains("Docker"));
        assert!(!text.contains("**"));
        assert!(!text.contains('#'));
        assert!(!text.contains('<'));
    }

    #[test]
    fn test_markdown_escaped_brackets_kept() {
        let extractor = MarkdownExtractor::new();
        let text = extractor.to_text("Built services in `Vec<T>` style &amp; more");
        assert_eq!(text, "Built services in Vec<T> style & more");
    }
}
