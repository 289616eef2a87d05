//! Role model: pluggable seam between the pipeline and the fitted artifacts.
//!
//! Default: `TfidfLinearModel` (JSON-exported TF-IDF vectorizer + linear classifier).
//! `RolePredictor` holds an `Arc<dyn RoleModel>`, so another backend only has to
//! provide a transform and a per-label margin.

use std::path::Path;

use tracing::info;

use crate::prediction::classifier::{DecisionScores, LinearClassifier};
use crate::prediction::labels::ROLE_LABELS;
use crate::prediction::vectorizer::{FeatureVector, TfidfVectorizer};
use crate::prediction::PredictionError;

/// The loadable model capability set. Implementations are read-only after
/// construction and shared across concurrent predictions.
pub trait RoleModel: Send + Sync {
    /// Width of the vectors `transform` produces and `score` accepts.
    fn dimension(&self) -> usize;

    fn transform(&self, normalized_text: &str) -> FeatureVector;

    /// One score per entry of [`ROLE_LABELS`], in label order.
    fn score(&self, features: &FeatureVector) -> Result<DecisionScores, PredictionError>;
}

/// A vectorizer and classifier validated as a matched pair.
#[derive(Debug)]
pub struct TfidfLinearModel {
    vectorizer: TfidfVectorizer,
    classifier: LinearClassifier,
}

impl TfidfLinearModel {
    pub fn new(
        vectorizer: TfidfVectorizer,
        classifier: LinearClassifier,
    ) -> Result<Self, PredictionError> {
        vectorizer.validate()?;
        classifier.validate(&ROLE_LABELS, vectorizer.dimension())?;
        Ok(Self {
            vectorizer,
            classifier,
        })
    }

    /// Loads both artifacts. Either one failing fails the pair.
    pub fn load(vectorizer_path: &Path, model_path: &Path) -> Result<Self, PredictionError> {
        let classifier = LinearClassifier::load(model_path)?;
        let vectorizer = TfidfVectorizer::load(vectorizer_path)?;
        let model = Self::new(vectorizer, classifier)?;
        info!(
            features = model.dimension(),
            classes = model.classifier.n_classes(),
            "Role model loaded"
        );
        Ok(model)
    }
}

impl RoleModel for TfidfLinearModel {
    fn dimension(&self) -> usize {
        self.vectorizer.dimension()
    }

    fn transform(&self, normalized_text: &str) -> FeatureVector {
        self.vectorizer.transform(normalized_text)
    }

    fn score(&self, features: &FeatureVector) -> Result<DecisionScores, PredictionError> {
        if features.dimension() != self.dimension() {
            return Err(PredictionError::ModelLoad(format!(
                "feature vector has {} dimensions, classifier expects {}",
                features.dimension(),
                self.dimension()
            )));
        }
        Ok(self.classifier.decision_function(features))
    }
}
