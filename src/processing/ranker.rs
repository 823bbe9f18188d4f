//! Scoring, threshold filtering, ranking and summary statistics

use crate::processing::document::JobOffer;
use crate::processing::normalizer::{CleanedTokens, TextNormalizer};
use crate::processing::similarity::{cosine_similarity, shared_terms, MatchTier};
use crate::processing::vectorizer::{transform, DocumentVector};
use crate::processing::vocabulary::VocabularyModel;
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

pub const DEFAULT_THRESHOLD: f64 = 0.2;
pub const DEFAULT_FALLBACK_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankingSettings {
    /// Scores must be strictly greater than this to be matched
    pub threshold: f64,
    /// Size of the unfiltered list shown when nothing is matched
    pub fallback_count: usize,
    /// Score documents on the rayon thread pool
    pub parallel: bool,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            fallback_count: DEFAULT_FALLBACK_COUNT,
            parallel: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredOffer {
    pub offer: JobOffer,
    pub score: f64,
    /// Position of the offer in the input collection
    pub position: usize,
    pub matched_terms: Vec<String>,
}

impl ScoredOffer {
    pub fn tier(&self) -> MatchTier {
        MatchTier::from_score(self.score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Summary {
    pub total_jobs: usize,
    pub matched_jobs: usize,
    pub average_score: f64,
    pub max_score: f64,
}

impl Summary {
    /// Statistics over every scored offer; zeros for an empty collection
    pub fn from_scores(scores: &[f64], matched_jobs: usize) -> Self {
        if scores.is_empty() {
            return Self::default();
        }

        Self {
            total_jobs: scores.len(),
            matched_jobs,
            average_score: scores.iter().sum::<f64>() / scores.len() as f64,
            max_score: scores.iter().copied().fold(0.0, f64::max),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingResult {
    pub recommendations: Vec<ScoredOffer>,
    pub summary: Summary,
    /// True when nothing cleared the threshold and the list is the unfiltered top offers
    pub fallback: bool,
}

/// Score every offer against the candidate and rank the result.
///
/// The candidate is vectorized once. Offers are scored independently and
/// collected in input order before the stable sort.
pub fn rank(
    candidate: &CleanedTokens,
    model: &VocabularyModel,
    normalizer: &TextNormalizer,
    documents: &[JobOffer],
    settings: &RankingSettings,
) -> RankingResult {
    let candidate_vector = transform(candidate, model);
    let score_one = |(position, offer): (usize, &JobOffer)| {
        score_offer(&candidate_vector, model, normalizer, position, offer)
    };

    let scored: Vec<ScoredOffer> = if settings.parallel {
        documents.par_iter().enumerate().map(score_one).collect()
    } else {
        documents.iter().enumerate().map(score_one).collect()
    };

    filter_and_rank(scored, settings)
}

fn score_offer(
    candidate: &DocumentVector,
    model: &VocabularyModel,
    normalizer: &TextNormalizer,
    position: usize,
    offer: &JobOffer,
) -> ScoredOffer {
    let vector = transform(&normalizer.normalize(&offer.combined_text), model);
    ScoredOffer {
        offer: offer.clone(),
        score: cosine_similarity(candidate, &vector),
        position,
        matched_terms: shared_terms(candidate, &vector, model),
    }
}

/// Apply the threshold, sort descending with ties in input order, and fall
/// back to the top unfiltered offers when nothing matched.
pub fn filter_and_rank(mut scored: Vec<ScoredOffer>, settings: &RankingSettings) -> RankingResult {
    let scores: Vec<f64> = scored.iter().map(|s| s.score).collect();
    let matched_jobs = scores.iter().filter(|&&score| score > settings.threshold).count();
    let summary = Summary::from_scores(&scores, matched_jobs);

    scored.sort_by_key(|s| s.position);
    // Stable sort keeps input order among equal scores
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    let fallback = matched_jobs == 0 && !scored.is_empty();
    let recommendations = if fallback {
        debug!(
            "No offer scored above {:.2}, showing top {} unfiltered",
            settings.threshold, settings.fallback_count
        );
        scored.truncate(settings.fallback_count);
        scored
    } else {
        scored.retain(|s| s.score > settings.threshold);
        scored
    };

    RankingResult {
        recommendations,
        summary,
        fallback,
    }
}
