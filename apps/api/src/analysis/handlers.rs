//! Axum route handlers for the Analysis API.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::analysis::session::{AnalysisOutcome, LatestAnalysis, SessionStatus};
use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub job_description: String,
    #[serde(default)]
    pub resume: ResumeRecord,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    #[serde(flatten)]
    pub status: SessionStatus,
    pub delay_ms: u64,
}

#[derive(Debug, Serialize)]
pub struct CancelResponse {
    pub cancelled: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analysis
///
/// Runs one analysis of the resume snapshot against the job description.
/// Empty job text is refused with 204 and changes nothing; a run overtaken by a
/// newer one answers 409 and its result is never published.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Response, AppError> {
    match state
        .analysis
        .run(&request.job_description, &request.resume)
        .await
    {
        AnalysisOutcome::Refused => Ok(StatusCode::NO_CONTENT.into_response()),
        AnalysisOutcome::Superseded(invocation) => Err(AppError::Superseded(invocation)),
        AnalysisOutcome::Cancelled(invocation) => Err(AppError::Cancelled(invocation)),
        AnalysisOutcome::Completed(latest) => Ok(Json(latest).into_response()),
    }
}

/// GET /api/v1/analysis/latest
pub async fn handle_latest(State(state): State<AppState>) -> Result<Json<LatestAnalysis>, AppError> {
    state
        .analysis
        .latest()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No analysis has completed yet".to_string()))
}

/// GET /api/v1/analysis/status
pub async fn handle_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: state.analysis.status(),
        delay_ms: saturating_millis(state.config.analysis_delay),
    })
}

fn saturating_millis(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}

/// POST /api/v1/analysis/cancel
pub async fn handle_cancel(State(state): State<AppState>) -> Json<CancelResponse> {
    Json(CancelResponse {
        cancelled: state.analysis.cancel(),
    })
}
