//! Cosine similarity between document vectors

use crate::processing::vectorizer::DocumentVector;
use crate::processing::vocabulary::VocabularyModel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cosine similarity in [0, 1].
///
/// Zero when either vector is the zero vector.
pub fn cosine_similarity(a: &DocumentVector, b: &DocumentVector) -> f64 {
    if a.is_zero() || b.is_zero() {
        return 0.0;
    }

    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (a.dot(b) / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Shared vocabulary terms, strongest contribution to the dot product first
pub fn shared_terms(
    a: &DocumentVector,
    b: &DocumentVector,
    model: &VocabularyModel,
) -> Vec<String> {
    let mut contributions: Vec<(&str, f64)> = a
        .shared_columns(b)
        .filter_map(|(column, wa, wb)| model.term(column).map(|term| (term, wa * wb)))
        .collect();

    contributions.sort_by(|x, y| y.1.total_cmp(&x.1).then_with(|| x.0.cmp(y.0)));
    contributions
        .into_iter()
        .map(|(term, _)| term.to_string())
        .collect()
}

/// Score bands used when presenting matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchTier {
    High,
    Medium,
    Low,
}

impl MatchTier {
    pub fn from_score(score: f64) -> Self {
        if score > 0.7 {
            MatchTier::High
        } else if score > 0.4 {
            MatchTier::Medium
        } else {
            MatchTier::Low
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchTier::High => write!(f, "High"),
            MatchTier::Medium => write!(f, "Medium"),
            MatchTier::Low => write!(f, "Low"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::normalizer::TextNormalizer;
    use crate::processing::vectorizer::transform;

    const EPSILON: f64 = 1e-9;

    fn setup() -> (TextNormalizer, VocabularyModel) {
        let normalizer = TextNormalizer::default();
        let corpus = ["python sql excel", "rust go", "docker kubernetes", "python rust"];
        let model = VocabularyModel::fit(&corpus, &normalizer);
        (normalizer, model)
    }

    fn vectorize(normalizer: &TextNormalizer, model: &VocabularyModel, text: &str) -> DocumentVector {
        transform(&normalizer.normalize(text), model)
    }

    #[test]
    fn test_self_similarity() {
        let (normalizer, model) = setup();
        let a = vectorize(&normalizer, &model, "Python and Rust, some Docker");
        let b = vectorize(&normalizer, &model, "Python and Rust, some Docker");
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_zero_overlap() {
        let (normalizer, model) = setup();
        let a = vectorize(&normalizer, &model, "python sql");
        let b = vectorize(&normalizer, &model, "docker kubernetes");
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_zero_vector_scores_zero() {
        let (normalizer, model) = setup();
        let empty = vectorize(&normalizer, &model, "");
        let a = vectorize(&normalizer, &model, "python");
        assert_eq!(cosine_similarity(&empty, &a), 0.0);
        assert_eq!(cosine_similarity(&a, &empty), 0.0);
        assert_eq!(cosine_similarity(&empty, &empty), 0.0);
    }

    #[test]
    fn test_symmetric_and_in_range() {
        let (normalizer, model) = setup();
        let texts = [
            "python",
            "python sql excel",
            "rust go go go",
            "docker python kubernetes rust",
            "chef",
        ];
        for x in &texts {
            for y in &texts {
                let a = vectorize(&normalizer, &model, x);
                let b = vectorize(&normalizer, &model, y);
                let ab = cosine_similarity(&a, &b);
                let ba = cosine_similarity(&b, &a);
                assert!((0.0..=1.0).contains(&ab));
                assert!((ab - ba).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn test_scale_invariant() {
        let a = DocumentVector::from_entries([(0, 1.0), (1, 2.0)]);
        let b = DocumentVector::from_entries([(0, 3.0), (1, 1.0)]);
        let scaled = DocumentVector::from_entries([(0, 30.0), (1, 10.0)]);
        assert!((cosine_similarity(&a, &b) - cosine_similarity(&a, &scaled)).abs() < EPSILON);
    }

    #[test]
    fn test_repeating_matched_term_never_decreases_score() {
        let (normalizer, model) = setup();
        let job = vectorize(&normalizer, &model, "python developer with sql");
        let mut previous = 0.0;
        for repeats in 1..8 {
            let resume = format!("rust docker {}", "python ".repeat(repeats));
            let score = cosine_similarity(&vectorize(&normalizer, &model, &resume), &job);
            assert!(score + EPSILON >= previous);
            previous = score;
        }
    }

    #[test]
    fn test_shared_terms_ordered_by_contribution() {
        let (normalizer, model) = setup();
        let a = vectorize(&normalizer, &model, "python python python sql docker");
        let b = vectorize(&normalizer, &model, "python sql rust");
        assert_eq!(shared_terms(&a, &b, &model), vec!["python", "sql"]);
    }

    #[test]
    fn test_match_tiers() {
        assert_eq!(MatchTier::from_score(0.95), MatchTier::High);
        assert_eq!(MatchTier::from_score(0.7), MatchTier::Medium);
        assert_eq!(MatchTier::from_score(0.41), MatchTier::Medium);
        assert_eq!(MatchTier::from_score(0.4), MatchTier::Low);
        assert_eq!(MatchTier::from_score(0.0), MatchTier::Low);
    }
}
