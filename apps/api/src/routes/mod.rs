pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::profile::handlers as profile;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/analysis", post(analysis::handle_analyze))
        .route("/api/v1/analysis/latest", get(analysis::handle_latest))
        .route("/api/v1/analysis/status", get(analysis::handle_status))
        .route("/api/v1/analysis/cancel", post(analysis::handle_cancel))
        // Resume profile API
        .route("/api/v1/resume/progress", post(profile::handle_progress))
        .route(
            "/api/v1/resume/skills/categorize",
            post(profile::handle_categorize),
        )
        .with_state(state)
}
