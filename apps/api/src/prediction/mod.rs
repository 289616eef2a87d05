// Job-role prediction pipeline.
// PDF bytes -> extractor -> normalizer -> vectorizer -> classifier -> ranker.
// Synchronous and CPU-bound: handlers must run it inside tokio::task::spawn_blocking.

pub mod classifier;
pub mod extractor;
pub mod handlers;
pub mod labels;
pub mod lemmatizer;
pub mod model;
pub mod normalizer;
pub mod predictor;
pub mod ranker;
pub mod stopwords;
pub mod vectorizer;

#[cfg(test)]
pub(crate) mod fixtures;

use thiserror::Error;

pub use predictor::{ModelArtifacts, RolePredictor};
pub use ranker::{extract_predicted_role, RolePrediction};

/// Failure modes of a single prediction call. None of them are retried.
#[derive(Debug, Error)]
pub enum PredictionError {
    /// The upload is not a readable PDF, or it has no pages or no text.
    #[error("could not read document: {0}")]
    DocumentParse(String),

    /// Vectorizer/classifier artifacts are missing, corrupt, or mismatched.
    #[error("model unavailable: {0}")]
    ModelLoad(String),

    #[error("at least 2 candidate roles are required, found {available}")]
    InsufficientCandidates { available: usize },
}
