//! Loading of job offer collections exported from the job store

use crate::error::{Result, RecommenderError};
use crate::input::file_detector::FileType;
use crate::processing::document::{JobOffer, JobRecord};
use log::{info, warn};
use serde_json::Value;
use std::path::Path;
use tokio::fs;

/// Load job offers from a `.json` array or a `.jsonl` file.
///
/// Entries that are not JSON objects, and unparsable JSON lines, are
/// skipped with a warning.
pub async fn load_job_offers(path: &Path) -> Result<Vec<JobOffer>> {
    let content = fs::read_to_string(path).await?;

    let offers = match FileType::from_path(path) {
        FileType::Json => parse_json_array(&content)?,
        FileType::JsonLines => parse_json_lines(&content),
        _ => {
            return Err(RecommenderError::UnsupportedFormat(format!(
                "Job offers must be .json or .jsonl: {}",
                path.display()
            )))
        }
    };

    info!("Loaded {} job offers from {}", offers.len(), path.display());
    Ok(offers)
}

pub fn parse_json_array(content: &str) -> Result<Vec<JobOffer>> {
    let value: Value = serde_json::from_str(content)?;
    let entries = match value {
        Value::Array(entries) => entries,
        _ => {
            return Err(RecommenderError::InvalidInput(
                "Job offers file must contain a JSON array".to_string(),
            ))
        }
    };

    Ok(entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| record_from_value(entry, index + 1))
        .map(JobOffer::from)
        .collect())
}

pub fn parse_json_lines(content: &str) -> Vec<JobOffer> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(index, line)| match serde_json::from_str::<Value>(line) {
            Ok(entry) => record_from_value(entry, index + 1),
            Err(e) => {
                warn!("Skipping malformed job offer on line {}: {}", index + 1, e);
                None
            }
        })
        .map(JobOffer::from)
        .collect()
}

fn record_from_value(entry: Value, number: usize) -> Option<JobRecord> {
    if !entry.is_object() {
        warn!("Skipping job offer #{}: not a JSON object", number);
        return None;
    }
    serde_json::from_value(entry)
        .map_err(|e| warn!("Skipping job offer #{}: {}", number, e))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_array() {
        let content = r#"[
            {"name": "Python Developer", "combined_text": "Python and SQL", "lien": "https://example.com/1"},
            {"combined_text": null},
            "not an object",
            {"name": "Chef", "combined_text": "Culinary skills", "company": "Bistro"}
        ]"#;

        let offers = parse_json_array(content).unwrap();
        assert_eq!(offers.len(), 3);
        assert_eq!(offers[0].link, "https://example.com/1");
        assert_eq!(offers[1].name, "Job Offer");
        assert_eq!(offers[1].combined_text, "");
        assert_eq!(offers[2].metadata.company, "Bistro");
    }

    #[test]
    fn test_parse_json_array_rejects_non_array() {
        assert!(matches!(
            parse_json_array(r#"{"name": "x"}"#),
            Err(RecommenderError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_json_array("not json"),
            Err(RecommenderError::Serialization(_))
        ));
    }

    #[test]
    fn test_offer_with_link_and_lien_is_kept() {
        let content = r#"[
            {"name": "A", "combined_text": "python", "link": "https://a", "lien": "https://a-fr"},
            {"name": "B", "combined_text": "sql"}
        ]"#;

        let offers = parse_json_array(content).unwrap();
        assert_eq!(offers.len(), 2);
        assert_eq!(offers[0].link, "https://a");
        assert_eq!(offers[1].link, "#");
    }

    #[test]
    fn test_parse_json_lines_skips_malformed() {
        let content = "{\"name\": \"A\", \"combined_text\": \"rust\"}\n\n{broken\n{\"name\": \"B\"}\n";
        let offers = parse_json_lines(content);
        let names: Vec<&str> = offers.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }
}
