//! Projection of cleaned documents onto the vocabulary term space

use crate::processing::normalizer::CleanedTokens;
use crate::processing::vocabulary::VocabularyModel;
use serde::Serialize;
use std::collections::BTreeMap;

/// Sparse vector of (column, weight) pairs sorted by column
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DocumentVector {
    entries: Vec<(usize, f64)>,
}

impl DocumentVector {
    /// Build from arbitrary pairs; zero weights are dropped and duplicate
    /// columns are summed.
    pub fn from_entries<I: IntoIterator<Item = (usize, f64)>>(entries: I) -> Self {
        let mut merged: BTreeMap<usize, f64> = BTreeMap::new();
        for (column, weight) in entries {
            *merged.entry(column).or_insert(0.0) += weight;
        }
        Self {
            entries: merged.into_iter().filter(|(_, w)| *w != 0.0).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, column: usize) -> Option<f64> {
        self.entries
            .binary_search_by_key(&column, |(c, _)| *c)
            .ok()
            .map(|pos| self.entries[pos].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Euclidean norm
    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Dot product by merging the two sorted entry lists
    pub fn dot(&self, other: &DocumentVector) -> f64 {
        self.shared_columns(other).map(|(_, a, b)| a * b).sum()
    }

    /// Columns present in both vectors with their two weights
    pub fn shared_columns<'a>(
        &'a self,
        other: &'a DocumentVector,
    ) -> impl Iterator<Item = (usize, f64, f64)> + 'a {
        let mut left = self.entries.iter().peekable();
        let mut right = other.entries.iter().peekable();

        std::iter::from_fn(move || loop {
            let (&&(lc, lw), &&(rc, rw)) = (left.peek()?, right.peek()?);
            match lc.cmp(&rc) {
                std::cmp::Ordering::Less => {
                    left.next();
                }
                std::cmp::Ordering::Greater => {
                    right.next();
                }
                std::cmp::Ordering::Equal => {
                    left.next();
                    right.next();
                    return Some((lc, lw, rw));
                }
            }
        })
    }

    fn normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, weight) in &mut self.entries {
                *weight /= norm;
            }
        }
        self
    }
}

/// Sublinear tf-idf weighting followed by L2 normalization.
///
/// Terms outside the vocabulary contribute nothing; a document without any
/// vocabulary term yields the zero vector.
pub fn transform(tokens: &CleanedTokens, model: &VocabularyModel) -> DocumentVector {
    let mut counts: BTreeMap<usize, u32> = BTreeMap::new();
    for token in tokens.iter() {
        if let Some(column) = model.index_of(token) {
            *counts.entry(column).or_insert(0) += 1;
        }
    }

    let entries = counts.into_iter().filter_map(|(column, tf)| {
        let idf = model.idf_at(column)?;
        let scaled_tf = 1.0 + f64::from(tf).ln();
        Some((column, scaled_tf * idf))
    });

    DocumentVector::from_entries(entries).normalized()
}
