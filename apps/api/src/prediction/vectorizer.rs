//! TF-IDF vectorizer restored from a fitted artifact.
//!
//! The JSON layout mirrors the fitted state of a scikit-learn `TfidfVectorizer`
//! (`vocabulary_`, `idf_`, `ngram_range`, `sublinear_tf`, `norm`), so an
//! offline-trained vectorizer can be exported without retraining.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::prediction::PredictionError;

/// Shortest token the vectorizer counts (scikit-learn's default `\b\w\w+\b`).
const MIN_TOKEN_LEN: usize = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    #[default]
    L2,
    #[serde(rename = "none")]
    Unnormalized,
}

/// Sparse feature vector. Entries are sorted by feature index.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    dimension: usize,
    entries: Vec<(usize, f64)>,
}

impl FeatureVector {
    pub fn new(dimension: usize, mut entries: Vec<(usize, f64)>) -> Self {
        entries.sort_by_key(|(index, _)| *index);
        Self { dimension, entries }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// True when no vocabulary term was present in the input.
    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(|(_, w)| *w == 0.0)
    }
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// Term (or space-joined n-gram) to feature index.
    pub vocabulary: HashMap<String, usize>,
    /// Inverse document frequency, indexed by feature.
    pub idf: Vec<f64>,
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
    #[serde(default)]
    pub sublinear_tf: bool,
    #[serde(default)]
    pub norm: Norm,
}

impl TfidfVectorizer {
    /// Reads and validates a vectorizer artifact.
    pub fn load(path: &Path) -> Result<Self, PredictionError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            PredictionError::ModelLoad(format!("cannot read vectorizer {}: {e}", path.display()))
        })?;
        let vectorizer: Self = serde_json::from_str(&raw).map_err(|e| {
            PredictionError::ModelLoad(format!("corrupt vectorizer {}: {e}", path.display()))
        })?;
        vectorizer.validate()?;
        Ok(vectorizer)
    }

    /// Number of features, i.e. the classifier's expected input width.
    pub fn dimension(&self) -> usize {
        self.idf.len()
    }

    pub fn validate(&self) -> Result<(), PredictionError> {
        let dimension = self.dimension();
        if self.vocabulary.len() != dimension {
            return Err(PredictionError::ModelLoad(format!(
                "vectorizer has {} vocabulary terms but {dimension} idf weights",
                self.vocabulary.len()
            )));
        }
        let mut seen = HashSet::with_capacity(dimension);
        for (term, &index) in &self.vocabulary {
            if index >= dimension || !seen.insert(index) {
                return Err(PredictionError::ModelLoad(format!(
                    "vectorizer term '{term}' has invalid feature index {index}"
                )));
            }
        }
        if let Some(bad) = self.idf.iter().position(|w| !w.is_finite()) {
            return Err(PredictionError::ModelLoad(format!(
                "vectorizer idf weight {bad} is not finite"
            )));
        }
        let (min_n, max_n) = self.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(PredictionError::ModelLoad(format!(
                "vectorizer ngram_range ({min_n}, {max_n}) is invalid"
            )));
        }
        Ok(())
    }

    /// Maps normalized text onto the fitted vocabulary.
    ///
    /// Terms outside the vocabulary are ignored, so any input (including the
    /// empty string) yields a vector, possibly all zero.
    pub fn transform(&self, text: &str) -> FeatureVector {
        let tokens: Vec<&str> = text
            .split_whitespace()
            .filter(|t| t.len() >= MIN_TOKEN_LEN)
            .collect();

        let mut counts: HashMap<usize, f64> = HashMap::new();
        let (min_n, max_n) = self.ngram_range;
        for n in min_n..=max_n {
            if n > tokens.len() {
                break;
            }
            for window in tokens.windows(n) {
                let gram = window.join(" ");
                if let Some(&index) = self.vocabulary.get(&gram) {
                    *counts.entry(index).or_insert(0.0) += 1.0;
                }
            }
        }

        // Sorted before weighting so the norm is summed in a fixed order.
        let mut entries: Vec<(usize, f64)> = counts.into_iter().collect();
        entries.sort_by_key(|(index, _)| *index);
        for (index, weight) in entries.iter_mut() {
            let tf = if self.sublinear_tf {
                1.0 + weight.ln()
            } else {
                *weight
            };
            *weight = tf * self.idf[*index];
        }

        let norm = match self.norm {
            Norm::L2 => entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt(),
            Norm::L1 => entries.iter().map(|(_, w)| w.abs()).sum::<f64>(),
            Norm::Unnormalized => 1.0,
        };
        if norm > 0.0 {
            for (_, weight) in entries.iter_mut() {
                *weight /= norm;
            }
        }

        FeatureVector::new(self.dimension(), entries)
    }
}
