//! Recommendation report handed to the formatters

use crate::processing::ranker::RankingResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub generated_at: DateTime<Utc>,
    /// Resume file the candidate text was extracted from
    pub resume: String,
    pub threshold: f64,
    pub fallback_count: usize,
    pub vocabulary_size: usize,
    pub processing_time_ms: u64,
    pub result: RankingResult,
}

impl RecommendationReport {
    pub fn new(
        resume: impl Into<String>,
        threshold: f64,
        fallback_count: usize,
        vocabulary_size: usize,
        result: RankingResult,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            resume: resume.into(),
            threshold,
            fallback_count,
            vocabulary_size,
            processing_time_ms: 0,
            result,
        }
    }

    pub fn with_processing_time(mut self, processing_time_ms: u64) -> Self {
        self.processing_time_ms = processing_time_ms;
        self
    }
}
