//! Fixed vocabulary with smoothed inverse document frequency weights

use crate::processing::normalizer::TextNormalizer;
use log::debug;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Term set plus per-term idf, fitted once from a reference corpus
#[derive(Debug, Clone, Serialize)]
pub struct VocabularyModel {
    index: HashMap<String, usize>,
    terms: Vec<String>,
    idf: Vec<f64>,
    document_count: usize,
}

impl VocabularyModel {
    /// Fit on the reference corpus.
    ///
    /// Columns follow the lexicographic order of terms, and
    /// `idf(t) = ln((1 + N) / (1 + df(t))) + 1`.
    pub fn fit<S: AsRef<str>>(reference_corpus: &[S], normalizer: &TextNormalizer) -> Self {
        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();

        for document in reference_corpus {
            let tokens = normalizer.normalize(document.as_ref());
            let unique: HashSet<String> = tokens.into_inner().into_iter().collect();
            for term in unique {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        let n = reference_corpus.len() as f64;
        let mut index = HashMap::with_capacity(document_frequency.len());
        let mut terms = Vec::with_capacity(document_frequency.len());
        let mut idf = Vec::with_capacity(document_frequency.len());

        for (column, (term, df)) in document_frequency.into_iter().enumerate() {
            idf.push(((1.0 + n) / (1.0 + df as f64)).ln() + 1.0);
            index.insert(term.clone(), column);
            terms.push(term);
        }

        debug!(
            "Fitted vocabulary: {} terms from {} reference documents",
            terms.len(),
            reference_corpus.len()
        );

        Self {
            index,
            terms,
            idf,
            document_count: reference_corpus.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of reference documents the model was fitted on
    pub fn document_count(&self) -> usize {
        self.document_count
    }

    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.index_of(term).map(|column| self.idf[column])
    }

    pub fn idf_at(&self, column: usize) -> Option<f64> {
        self.idf.get(column).copied()
    }

    pub fn term(&self, column: usize) -> Option<&str> {
        self.terms.get(column).map(String::as_str)
    }

    /// Terms with their idf, in column order
    pub fn terms(&self) -> impl Iterator<Item = (&str, f64)> {
        self.terms
            .iter()
            .map(String::as_str)
            .zip(self.idf.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_fit_builds_sorted_columns() {
        let normalizer = TextNormalizer::default();
        let model = VocabularyModel::fit(&["python sql excel"], &normalizer);

        assert_eq!(model.len(), 3);
        assert_eq!(model.document_count(), 1);
        assert_eq!(model.index_of("excel"), Some(0));
        assert_eq!(model.index_of("python"), Some(1));
        assert_eq!(model.index_of("sql"), Some(2));
        assert_eq!(model.term(1), Some("python"));
        assert_eq!(model.index_of("java"), None);
    }

    #[test]
    fn test_smoothed_idf() {
        let normalizer = TextNormalizer::default();
        let corpus = ["python sql", "python", "rust"];
        let model = VocabularyModel::fit(&corpus, &normalizer);

        let python = model.idf("python").unwrap();
        assert!((python - (4.0_f64 / 3.0).ln() - 1.0).abs() < EPSILON);

        let sql = model.idf("sql").unwrap();
        assert!((sql - 2.0_f64.ln() - 1.0).abs() < EPSILON);
        assert!(sql > python);
        assert!(model.terms().all(|(_, idf)| idf >= 1.0));
    }

    #[test]
    fn test_df_counts_documents_not_occurrences() {
        let normalizer = TextNormalizer::default();
        let model = VocabularyModel::fit(&["go go go", "rust"], &normalizer);
        assert!((model.idf("go").unwrap() - model.idf("rust").unwrap()).abs() < EPSILON);
    }

    #[test]
    fn test_every_term_in_corpus_everywhere_has_weight_one() {
        let normalizer = TextNormalizer::default();
        let model = VocabularyModel::fit(&["python sql", "sql python"], &normalizer);
        assert!((model.idf("python").unwrap() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_stopwords_and_empty_corpus() {
        let normalizer = TextNormalizer::default();
        let model = VocabularyModel::fit(&["the python and the"], &normalizer);
        assert_eq!(model.len(), 1);

        let empty: [&str; 0] = [];
        let model = VocabularyModel::fit(&empty, &normalizer);
        assert!(model.is_empty());
        assert_eq!(model.document_count(), 0);
    }
}
