//! Ranker: picks the two strongest roles and renders the recommendation.
//!
//! The rendered sentence is an external contract: downstream code takes the
//! first `**...**` span as the predicted role. Keep the bold markers.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::prediction::PredictionError;

static BOLD_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold span pattern is valid"));

/// Role used for the interview when a prediction string carries no bold span.
pub const FALLBACK_INTERVIEW_ROLE: &str = "Software Engineer";

/// The two highest-scoring roles of one prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RolePrediction {
    pub best: String,
    pub second: String,
    pub best_score: f64,
    pub second_score: f64,
}

impl RolePrediction {
    /// The recommendation sentence shown to the candidate.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RolePrediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Based on your resume, you are best suited for **{}** position. \
             Other possible roles include **{}**.",
            self.best, self.second
        )
    }
}

/// Indices of the two highest scores, highest first. Equal scores rank the
/// lower index first.
fn top_two(scores: &[f64]) -> Option<(usize, usize)> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]).then(a.cmp(&b)));
    match order.as_slice() {
        [first, second, ..] => Some((*first, *second)),
        _ => None,
    }
}

/// Selects the best and second-best roles from per-label decision scores.
pub fn rank(scores: &[f64], labels: &[&str]) -> Result<RolePrediction, PredictionError> {
    if labels.len() < 2 {
        return Err(PredictionError::InsufficientCandidates {
            available: labels.len(),
        });
    }
    if scores.len() != labels.len() {
        return Err(PredictionError::ModelLoad(format!(
            "classifier produced {} scores for {} role labels",
            scores.len(),
            labels.len()
        )));
    }
    let (best, second) = top_two(scores).ok_or(PredictionError::InsufficientCandidates {
        available: scores.len(),
    })?;

    Ok(RolePrediction {
        best: labels[best].to_string(),
        second: labels[second].to_string(),
        best_score: scores[best],
        second_score: scores[second],
    })
}

/// Returns the first bold-delimited span of a recommendation sentence.
pub fn extract_predicted_role(prediction: &str) -> Option<&str> {
    BOLD_SPAN
        .captures(prediction)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}
