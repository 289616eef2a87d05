pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::prediction::handlers as prediction;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;
    Router::new()
        .route("/health", get(health::health_handler))
        // Role prediction
        .route("/api/v1/predict", post(prediction::handle_predict))
        .route("/api/v1/predict/text", post(prediction::handle_predict_text))
        // Resume analysis and interview profile
        .route("/api/v1/resume/analyze", post(resume::handle_analyze_resume))
        .route("/api/v1/profile", post(resume::handle_create_profile))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
