use std::time::Duration;

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::prediction::{PredictionError, RolePrediction};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct PredictTextRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub request_id: Uuid,
    /// Recommendation sentence with both roles in `**bold**`.
    pub prediction: String,
    pub best_role: String,
    pub second_role: String,
    pub predicted_at: DateTime<Utc>,
}

impl From<RolePrediction> for PredictionResponse {
    fn from(prediction: RolePrediction) -> Self {
        PredictionResponse {
            request_id: Uuid::new_v4(),
            prediction: prediction.message(),
            best_role: prediction.best,
            second_role: prediction.second,
            predicted_at: Utc::now(),
        }
    }
}

/// Fields of a resume upload form.
#[derive(Default)]
pub struct UploadForm {
    pub file: Option<Bytes>,
    pub experience: Option<String>,
}

impl UploadForm {
    /// Reads the `file` and `experience` parts; other parts are ignored.
    pub async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = UploadForm::default();
        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().map(str::to_owned);
            match name.as_deref() {
                Some("file") => form.file = Some(field.bytes().await.map_err(multipart_error)?),
                Some("experience") => {
                    form.experience = Some(field.text().await.map_err(multipart_error)?)
                }
                _ => {}
            }
        }
        Ok(form)
    }

    pub fn require_file(&mut self) -> Result<Bytes, AppError> {
        self.file
            .take()
            .ok_or_else(|| AppError::Validation("Missing multipart field 'file'".to_string()))
    }
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::Validation(err.body_text())
    }
}

/// Runs a CPU-bound pipeline call off the async executor, bounded by the
/// configured prediction deadline.
pub async fn run_blocking<T, F>(state: &AppState, job: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, PredictionError> + Send + 'static,
    T: Send + 'static,
{
    let secs = state.config.prediction_timeout_secs;
    // On timeout the blocking task runs to completion in the background and
    // its result is dropped.
    let joined = tokio::time::timeout(Duration::from_secs(secs), tokio::task::spawn_blocking(job))
        .await
        .map_err(|_| AppError::Timeout(secs))?;
    let result = joined.map_err(|e| {
        AppError::Internal(anyhow::anyhow!("spawn_blocking failed in prediction: {e}"))
    })?;
    Ok(result?)
}

/// POST /api/v1/predict
pub async fn handle_predict(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<PredictionResponse>, AppError> {
    let bytes = UploadForm::read(multipart).await?.require_file()?;
    info!(upload_bytes = bytes.len(), "Role prediction requested");

    let predictor = state.predictor.clone();
    let prediction = run_blocking(&state, move || predictor.predict_document(&bytes)).await?;
    Ok(Json(prediction.into()))
}

/// POST /api/v1/predict/text
pub async fn handle_predict_text(
    State(state): State<AppState>,
    Json(req): Json<PredictTextRequest>,
) -> Result<Json<PredictionResponse>, AppError> {
    let predictor = state.predictor.clone();
    let prediction = run_blocking(&state, move || predictor.predict_text(&req.text)).await?;
    Ok(Json(prediction.into()))
}
