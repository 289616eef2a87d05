use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::prediction::extract_predicted_role;
use crate::prediction::extractor::extract_text;
use crate::prediction::handlers::{run_blocking, PredictionResponse, UploadForm};
use crate::prediction::ranker::FALLBACK_INTERVIEW_ROLE;
use crate::resume::{parse_resume, CandidateProfile, ExperienceLevel, ResumeInfo};
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct ResumeAnalysisResponse {
    pub resume: ResumeInfo,
    #[serde(flatten)]
    pub prediction: PredictionResponse,
    /// Role the interview is run for: the first bold role of `prediction`.
    pub interview_role: String,
    /// Present when a candidate name could be extracted.
    pub profile: Option<CandidateProfile>,
}

/// POST /api/v1/resume/analyze
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ResumeAnalysisResponse>, AppError> {
    let mut form = UploadForm::read(multipart).await?;
    let bytes = form.require_file()?;
    let experience = match form.experience.as_deref().map(str::trim) {
        None | Some("") => ExperienceLevel::default(),
        Some(label) => ExperienceLevel::from_label(label).ok_or_else(|| {
            AppError::Validation(format!(
                "experience must be Entry-Level, Mid-Level or Senior-Level, got '{label}'"
            ))
        })?,
    };
    info!(upload_bytes = bytes.len(), "Resume analysis requested");

    let predictor = state.predictor.clone();
    let (resume, prediction) = run_blocking(&state, move || {
        let text = extract_text(&bytes)?;
        let resume = parse_resume(&text);
        let prediction = predictor.predict_text(&text)?;
        Ok((resume, prediction))
    })
    .await?;

    let prediction = PredictionResponse::from(prediction);
    let interview_role = extract_predicted_role(&prediction.prediction)
        .unwrap_or(FALLBACK_INTERVIEW_ROLE)
        .to_string();

    let profile = match &resume.name {
        Some(name) => Some(
            CandidateProfile {
                name: name.clone(),
                job_role: interview_role.clone(),
                experience,
                skills: resume.skills.clone(),
            }
            .validated()?,
        ),
        None => None,
    };

    Ok(Json(ResumeAnalysisResponse {
        resume,
        prediction,
        interview_role,
        profile,
    }))
}

/// POST /api/v1/profile
pub async fn handle_create_profile(
    Json(profile): Json<CandidateProfile>,
) -> Result<Json<CandidateProfile>, AppError> {
    Ok(Json(profile.validated()?))
}
