mod config;
mod errors;
mod evaluation;
mod llm_client;
mod routes;
mod screens;
mod session;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::evaluation::evaluator::GeminiEvaluator;
use crate::routes::build_router;
use crate::session::store::SessionStore;
use crate::state::AppState;

/// How often idle sessions are swept.
const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting thesis review v{}", env!("CARGO_PKG_VERSION"));

    // Initialize evaluator (a missing key fails each submission, not startup)
    if config.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY is not set; every evaluation will fail until it is configured");
    }
    let evaluator = Arc::new(GeminiEvaluator::new(
        config.gemini_api_key.clone(),
        config.gemini_api_base.clone(),
    ));
    info!("Evaluator initialized (model: {})", llm_client::MODEL);

    // Initialize session store
    let sessions = Arc::new(SessionStore::new(
        evaluator,
        Duration::from_secs(config.session_ttl_secs),
    ));
    sessions.spawn_sweeper(SWEEP_INTERVAL);

    let state = AppState {
        sessions,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
