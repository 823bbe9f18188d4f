//! Recommendation engine holding the shared vocabulary model

use crate::config::Config;
use crate::error::{RecommenderError, Result};
use crate::processing::document::JobOffer;
use crate::processing::normalizer::{CleanedTokens, TextNormalizer};
use crate::processing::ranker::{self, RankingResult, RankingSettings};
use crate::processing::vectorizer::{self, DocumentVector};
use crate::processing::vocabulary::VocabularyModel;
use log::info;
use std::sync::Arc;
use std::time::Instant;

/// Ranks job offers against a resume.
///
/// The vocabulary is fitted once and shared read-only through an `Arc`;
/// refitting needs `&mut self`, so it can never race with a ranking call.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    normalizer: TextNormalizer,
    settings: RankingSettings,
    vocabulary: Option<Arc<VocabularyModel>>,
}

impl RecommendationEngine {
    /// Create an engine without a vocabulary; call [`fit`](Self::fit) before ranking
    pub fn new(normalizer: TextNormalizer, settings: RankingSettings) -> Self {
        Self {
            normalizer,
            settings,
            vocabulary: None,
        }
    }

    /// Build a fitted engine from configuration and a reference corpus
    pub fn from_config<S: AsRef<str>>(config: &Config, reference_corpus: &[S]) -> Result<Self> {
        config.validate()?;
        let mut engine = Self::new(config.normalizer(), config.ranking_settings());
        engine.fit(reference_corpus);
        Ok(engine)
    }

    /// Fit the vocabulary, replacing any previous one. Vectors produced under
    /// a previous fit are not comparable with new ones.
    pub fn fit<S: AsRef<str>>(&mut self, reference_corpus: &[S]) -> Arc<VocabularyModel> {
        let start_time = Instant::now();
        let model = Arc::new(VocabularyModel::fit(reference_corpus, &self.normalizer));
        info!(
            "Vocabulary fitted: {} terms from {} reference documents in {:.2?}",
            model.len(),
            model.document_count(),
            start_time.elapsed()
        );
        self.vocabulary = Some(Arc::clone(&model));
        model
    }

    pub fn is_fitted(&self) -> bool {
        self.vocabulary.is_some()
    }

    pub fn vocabulary(&self) -> Result<&Arc<VocabularyModel>> {
        self.vocabulary.as_ref().ok_or(RecommenderError::VocabularyNotFitted)
    }

    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    pub fn settings(&self) -> &RankingSettings {
        &self.settings
    }

    pub fn normalize(&self, text: &str) -> CleanedTokens {
        self.normalizer.normalize(text)
    }

    /// Normalize and vectorize arbitrary text
    pub fn transform(&self, text: &str) -> Result<DocumentVector> {
        let model = self.vocabulary()?;
        Ok(vectorizer::transform(&self.normalize(text), model))
    }

    /// Rank job offers against the resume text
    pub fn rank(&self, resume_text: &str, documents: &[JobOffer]) -> Result<RankingResult> {
        let model = self.vocabulary()?;
        let start_time = Instant::now();

        let candidate = self.normalize(resume_text);
        let result = ranker::rank(&candidate, model, &self.normalizer, documents, &self.settings);

        info!(
            "Ranked {} offers in {:.2?}: {} above threshold {:.2}{}",
            result.summary.total_jobs,
            start_time.elapsed(),
            result.summary.matched_jobs,
            self.settings.threshold,
            if result.fallback { " (fallback)" } else { "" }
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::similarity::cosine_similarity;

    fn fitted() -> RecommendationEngine {
        let mut engine = RecommendationEngine::new(TextNormalizer::default(), RankingSettings::default());
        engine.fit(&["python sql excel"]);
        engine
    }

    #[test]
    fn test_unfitted_engine_fails_fast() {
        let engine = RecommendationEngine::new(TextNormalizer::default(), RankingSettings::default());
        assert!(!engine.is_fitted());
        assert!(matches!(
            engine.transform("python"),
            Err(RecommenderError::VocabularyNotFitted)
        ));
        assert!(matches!(
            engine.rank("python", &[]),
            Err(RecommenderError::VocabularyNotFitted)
        ));
    }

    #[test]
    fn test_end_to_end_scenario() {
        let engine = fitted();
        let documents = vec![
            JobOffer::from_text("Looking for a Python developer"),
            JobOffer::from_text("Chef needed, culinary skills"),
        ];

        let result = engine.rank("Experienced in Python and SQL", &documents).unwrap();

        let python_job = engine.transform(&documents[0].combined_text).unwrap();
        let chef_job = engine.transform(&documents[1].combined_text).unwrap();
        let resume = engine.transform("Experienced in Python and SQL").unwrap();
        let first = cosine_similarity(&resume, &python_job);
        let second = cosine_similarity(&resume, &chef_job);

        assert!(first > second);
        assert!(first > 0.2);
        assert_eq!(second, 0.0);
        assert!(!result.fallback);
        assert_eq!(result.recommendations.len(), 1);
        assert_eq!(result.recommendations[0].offer, documents[0]);
    }

    #[test]
    fn test_empty_input_scenario() {
        let engine = fitted();
        let result = engine.rank("", &[]).unwrap();

        assert!(result.recommendations.is_empty());
        assert_eq!(result.summary.total_jobs, 0);
        assert_eq!(result.summary.matched_jobs, 0);
        assert_eq!(result.summary.average_score, 0.0);
        assert_eq!(result.summary.max_score, 0.0);
    }

    #[test]
    fn test_refit_replaces_vocabulary() {
        let mut engine = fitted();
        let before = Arc::clone(engine.vocabulary().unwrap());
        engine.fit(&["rust", "go"]);
        let after = engine.vocabulary().unwrap();

        assert_eq!(before.len(), 3);
        assert_eq!(after.len(), 2);
        assert!(after.index_of("python").is_none());
    }

    #[test]
    fn test_shared_across_threads() {
        let engine = Arc::new(fitted());
        let documents = Arc::new(vec![JobOffer::from_text("python sql")]);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = Arc::clone(&engine);
                let documents = Arc::clone(&documents);
                std::thread::spawn(move || engine.rank("python sql excel", &documents).unwrap())
            })
            .collect();

        let results: Vec<RankingResult> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(results.windows(2).all(|w| w[0] == w[1]));
    }
}
