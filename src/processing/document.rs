//! Job offer records and their resolved documents

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const NOT_SPECIFIED: &str = "Not specified";
pub const DEFAULT_NAME: &str = "Job Offer";
pub const DEFAULT_LINK: &str = "#";
const DESCRIPTION_PREVIEW_CHARS: usize = 200;

/// Job record as supplied by the external job store. Every field is optional;
/// a field holding a non-string value is read as missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub combined_text: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub link: Option<String>,
    /// French export key for `link`, used when `link` is absent
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub lien: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub job_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub salary: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub company: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// Metadata carried through ranking unmodified
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferMetadata {
    pub description: String,
    pub location: String,
    pub job_type: String,
    pub salary: String,
    pub company: String,
}

/// Immutable job offer with all defaults resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobOffer {
    pub name: String,
    pub combined_text: String,
    pub link: String,
    pub metadata: OfferMetadata,
}

impl JobOffer {
    pub fn new(name: impl Into<String>, combined_text: impl Into<String>, link: impl Into<String>) -> Self {
        JobRecord {
            name: Some(name.into()),
            combined_text: Some(combined_text.into()),
            link: Some(link.into()),
            ..JobRecord::default()
        }
        .into()
    }

    /// Offer with only searchable text, every other field defaulted
    pub fn from_text(combined_text: impl Into<String>) -> Self {
        JobRecord {
            combined_text: Some(combined_text.into()),
            ..JobRecord::default()
        }
        .into()
    }
}

impl From<JobRecord> for JobOffer {
    fn from(record: JobRecord) -> Self {
        let combined_text = record.combined_text.unwrap_or_default();
        let description = record
            .description
            .unwrap_or_else(|| description_preview(&combined_text));
        let or_not_specified = |field: Option<String>| field.unwrap_or_else(|| NOT_SPECIFIED.to_string());

        Self {
            name: record.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            link: record
                .link
                .or(record.lien)
                .unwrap_or_else(|| DEFAULT_LINK.to_string()),
            metadata: OfferMetadata {
                description,
                location: or_not_specified(record.location),
                job_type: or_not_specified(record.job_type),
                salary: or_not_specified(record.salary),
                company: or_not_specified(record.company),
            },
            combined_text,
        }
    }
}

/// First 200 characters followed by an ellipsis when the text is longer
fn description_preview(text: &str) -> String {
    if text.chars().count() > DESCRIPTION_PREVIEW_CHARS {
        let preview: String = text.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
        format!("{}...", preview)
    } else {
        text.to_string()
    }
}
