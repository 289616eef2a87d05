use std::sync::Arc;

use crate::config::Config;
use crate::prediction::RolePredictor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Lazily loaded role model, shared read-only across requests.
    pub predictor: Arc<RolePredictor>,
}
