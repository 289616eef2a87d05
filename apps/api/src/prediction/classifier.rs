//! One-vs-rest linear classifier restored from a fitted artifact.
//!
//! Layout mirrors a scikit-learn linear model export: `coef` is
//! `n_classes x n_features`, `intercept` has one entry per class, and the
//! optional `classes` list lets the loader check positional label alignment.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::prediction::vectorizer::FeatureVector;
use crate::prediction::PredictionError;

/// One decision margin per role label, in label order. Not a probability.
pub type DecisionScores = Vec<f64>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearClassifier {
    #[serde(default)]
    pub classes: Option<Vec<String>>,
    pub coef: Vec<Vec<f64>>,
    pub intercept: Vec<f64>,
}

impl LinearClassifier {
    pub fn load(path: &Path) -> Result<Self, PredictionError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            PredictionError::ModelLoad(format!("cannot read classifier {}: {e}", path.display()))
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            PredictionError::ModelLoad(format!("corrupt classifier {}: {e}", path.display()))
        })
    }

    pub fn n_classes(&self) -> usize {
        self.coef.len()
    }

    /// Checks that the classifier is usable with `labels` and vectors of width `dimension`.
    pub fn validate(&self, labels: &[&str], dimension: usize) -> Result<(), PredictionError> {
        if self.n_classes() != labels.len() || self.intercept.len() != labels.len() {
            return Err(PredictionError::ModelLoad(format!(
                "classifier has {} coefficient rows and {} intercepts, expected {} role labels",
                self.n_classes(),
                self.intercept.len(),
                labels.len()
            )));
        }
        if let Some(classes) = &self.classes {
            let aligned = classes.len() == labels.len()
                && classes.iter().zip(labels).all(|(c, l)| c == l);
            if !aligned {
                return Err(PredictionError::ModelLoad(
                    "classifier classes are not aligned with the role label table".to_string(),
                ));
            }
        }
        for (row, coefficients) in self.coef.iter().enumerate() {
            if coefficients.len() != dimension {
                return Err(PredictionError::ModelLoad(format!(
                    "classifier row {row} has {} weights but the vectorizer produces {dimension} features",
                    coefficients.len()
                )));
            }
            if coefficients.iter().any(|w| !w.is_finite()) {
                return Err(PredictionError::ModelLoad(format!(
                    "classifier row {row} contains a non-finite weight"
                )));
            }
        }
        if self.intercept.iter().any(|b| !b.is_finite()) {
            return Err(PredictionError::ModelLoad(
                "classifier intercept contains a non-finite value".to_string(),
            ));
        }
        Ok(())
    }

    /// Signed distance of `features` from each class hyperplane.
    pub fn decision_function(&self, features: &FeatureVector) -> DecisionScores {
        self.coef
            .iter()
            .zip(&self.intercept)
            .map(|(row, bias)| {
                features
                    .entries()
                    .iter()
                    .fold(*bias, |acc, (index, weight)| acc + row[*index] * weight)
            })
            .collect()
    }
}
