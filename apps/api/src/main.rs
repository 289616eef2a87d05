mod config;
mod errors;
mod prediction;
mod resume;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::prediction::{ModelArtifacts, RolePredictor};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on unparseable env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Interview API v{}", env!("CARGO_PKG_VERSION"));

    // Role model is loaded on first prediction unless PRELOAD_MODEL is set
    let predictor = Arc::new(RolePredictor::new(ModelArtifacts {
        vectorizer_path: config.vectorizer_path.clone(),
        model_path: config.model_path.clone(),
    }));
    info!(
        "Model artifacts: vectorizer={} classifier={}",
        config.vectorizer_path.display(),
        config.model_path.display()
    );

    if config.preload_model {
        let preload = predictor.clone();
        let loaded = tokio::task::spawn_blocking(move || preload.model().map(|_| ())).await?;
        if let Err(e) = loaded {
            warn!("Model preload failed, will retry on first prediction: {e}");
        }
    }

    // Build app state
    let state = AppState {
        config: config.clone(),
        predictor,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
