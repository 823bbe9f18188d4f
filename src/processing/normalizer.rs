//! Text normalization into comparable tokens

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Closed list of English function words removed during normalization
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "the", "and", "of", "for", "with", "in", "on", "at", "by", "an",
    "a", "is", "to", "from", "as", "are", "it", "this", "that",
];

pub fn default_stopwords() -> Vec<String> {
    DEFAULT_STOPWORDS.iter().map(|&s| s.to_string()).collect()
}

/// Ordered sequence of lowercase alphanumeric tokens
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedTokens(Vec<String>);

impl CleanedTokens {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Join tokens back into a single space-separated string
    pub fn to_text(&self) -> String {
        self.0.join(" ")
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct TextNormalizer {
    stopwords: HashSet<String>,
    phone_regex: Regex,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_STOPWORDS.iter().copied())
    }
}

impl TextNormalizer {
    pub fn new<I, S>(stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stopwords = stopwords
            .into_iter()
            .map(|s| s.as_ref().trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        // Runs of ten or more digits are treated as phone numbers
        let phone_regex = Regex::new(r"\d{10,}").expect("Invalid phone regex");

        Self {
            stopwords,
            phone_regex,
        }
    }

    /// Lowercase, strip emails, punctuation and phone numbers, drop stopwords
    pub fn normalize(&self, text: &str) -> CleanedTokens {
        let lowered = text.to_lowercase();

        // '@' is punctuation, so emails must go before punctuation removal
        let without_emails = lowered
            .split_whitespace()
            .filter(|token| !token.contains('@'))
            .collect::<Vec<_>>()
            .join(" ");

        let without_punctuation: String = without_emails
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace())
            .collect();

        let without_phones = self.phone_regex.replace_all(&without_punctuation, "");

        CleanedTokens(
            without_phones
                .split_whitespace()
                .filter(|word| !self.stopwords.contains(*word))
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(normalizer: &TextNormalizer, text: &str) -> Vec<String> {
        normalizer.normalize(text).into_inner()
    }

    #[test]
    fn test_lowercase_and_stopwords() {
        let normalizer = TextNormalizer::default();
        assert_eq!(
            tokens(&normalizer, "Experienced in Python and SQL"),
            vec!["experienced", "python", "sql"]
        );
    }

    #[test]
    fn test_punctuation_removed() {
        let normalizer = TextNormalizer::default();
        assert_eq!(
            tokens(&normalizer, "Rust, Go; (Docker)! node.js"),
            vec!["rust", "go", "docker", "nodejs"]
        );
    }

    #[test]
    fn test_email_removed() {
        let normalizer = TextNormalizer::default();
        assert_eq!(
            tokens(&normalizer, "Contact john.doe@example.com today"),
            vec!["contact", "today"]
        );
    }

    #[test]
    fn test_phone_numbers_removed() {
        let normalizer = TextNormalizer::default();
        assert_eq!(
            tokens(&normalizer, "Call 0612345678 or 555-123-4567, room 42"),
            vec!["call", "or", "room", "42"]
        );
        // Nine digits are kept
        assert_eq!(tokens(&normalizer, "id 123456789"), vec!["id", "123456789"]);
    }

    #[test]
    fn test_digit_run_inside_token() {
        let normalizer = TextNormalizer::default();
        assert_eq!(tokens(&normalizer, "ref12345678901x"), vec!["refx"]);
    }

    #[test]
    fn test_empty_input() {
        let normalizer = TextNormalizer::default();
        assert!(normalizer.normalize("").is_empty());
        assert!(normalizer.normalize("   \n\t ").is_empty());
        assert!(normalizer.normalize("the and of").is_empty());
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let normalizer = TextNormalizer::default();
        let text = "Senior ENGINEER -- C++/Rust, 10 years @ ACME; mail: a@b.io, tel 0123456789!";
        let first = normalizer.normalize(text);
        let second = normalizer.normalize(&first.to_text());
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_stopwords_are_lowercased() {
        let normalizer = TextNormalizer::new(["Looking", " NEEDED "]);
        assert_eq!(normalizer.stopword_count(), 2);
        assert!(normalizer.is_stopword("looking"));
        assert_eq!(
            tokens(&normalizer, "Looking for chef, needed"),
            vec!["for", "chef"]
        );
    }
}
