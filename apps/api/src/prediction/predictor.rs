//! Role predictor: runs the full pipeline against a lazily loaded model.
//!
//! The model is loaded on first use behind a `OnceCell`: concurrent first
//! callers wait on a single load, and afterwards every prediction reads the
//! same immutable model without locking. A failed load is not cached, so a
//! later call picks up artifacts deployed after startup.

use std::path::PathBuf;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::{debug, error};

use crate::prediction::extractor::extract_text;
use crate::prediction::labels::ROLE_LABELS;
use crate::prediction::model::{RoleModel, TfidfLinearModel};
use crate::prediction::normalizer::normalize;
use crate::prediction::ranker::{rank, RolePrediction};
use crate::prediction::PredictionError;

/// Locations of the persisted vectorizer/classifier pair.
#[derive(Debug, Clone)]
pub struct ModelArtifacts {
    pub vectorizer_path: PathBuf,
    pub model_path: PathBuf,
}

pub struct RolePredictor {
    artifacts: Option<ModelArtifacts>,
    model: OnceCell<Arc<dyn RoleModel>>,
}

impl RolePredictor {
    /// Predictor that loads `artifacts` on first prediction.
    pub fn new(artifacts: ModelArtifacts) -> Self {
        Self {
            artifacts: Some(artifacts),
            model: OnceCell::new(),
        }
    }

    /// Predictor around an already constructed model.
    #[cfg(test)]
    pub fn with_model(model: Arc<dyn RoleModel>) -> Self {
        Self {
            artifacts: None,
            model: OnceCell::with_value(model),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.model.get().is_some()
    }

    /// Returns the shared model, loading it if this is the first use.
    pub fn model(&self) -> Result<&Arc<dyn RoleModel>, PredictionError> {
        self.model.get_or_try_init(|| {
            let artifacts = self.artifacts.as_ref().ok_or_else(|| {
                PredictionError::ModelLoad("no model artifacts configured".to_string())
            })?;
            TfidfLinearModel::load(&artifacts.vectorizer_path, &artifacts.model_path)
                .map(|model| Arc::new(model) as Arc<dyn RoleModel>)
                .map_err(|e| {
                    error!("Role model load failed: {e}");
                    e
                })
        })
    }

    /// Full pipeline from raw PDF bytes.
    pub fn predict_document(&self, bytes: &[u8]) -> Result<RolePrediction, PredictionError> {
        let text = extract_text(bytes)?;
        self.predict_text(&text)
    }

    /// Pipeline from already extracted text (skips PDF extraction).
    pub fn predict_text(&self, text: &str) -> Result<RolePrediction, PredictionError> {
        let normalized = normalize(text);
        let model = self.model()?;
        let features = model.transform(&normalized);
        if features.is_zero() {
            debug!("No vocabulary terms in text; scores reduce to intercepts");
        }
        let scores = model.score(&features)?;
        let prediction = rank(&scores, &ROLE_LABELS)?;

        debug!(
            tokens = normalized.split_whitespace().count(),
            active_features = features.entries().len(),
            best = %prediction.best,
            best_score = prediction.best_score,
            second = %prediction.second,
            second_score = prediction.second_score,
            "Role prediction complete"
        );
        Ok(prediction)
    }
}
