pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::session::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes();

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(handlers::handle_input_screen))
        .route("/evaluations", post(handlers::handle_create))
        .route("/evaluations/:id", get(handlers::handle_show))
        .route("/evaluations/:id/submit", post(handlers::handle_submit))
        .route("/evaluations/:id/reset", post(handlers::handle_reset))
        .route("/evaluations/:id/report", get(handlers::handle_report))
        .route("/evaluations/:id/state", get(handlers::handle_state))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
