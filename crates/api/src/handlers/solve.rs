//! Handler for authenticated task submission.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use solver_core::submission::Submission;
use solver_core::types::RequestId;

use crate::error::AppResult;
use crate::state::AppState;

/// Confirmation returned once the background task is scheduled.
#[derive(Debug, Serialize)]
pub struct SolveResponse {
    pub status: &'static str,
    pub request_id: RequestId,
    pub message: &'static str,
}

/// POST /solve
///
/// Validates the body, checks the shared secret, then schedules one agent
/// run for the submitted URL and answers without waiting for it. The body
/// is taken as raw bytes so a missing or wrong `Content-Type` does not
/// change the outcome.
pub async fn solve(State(state): State<AppState>, body: Bytes) -> AppResult<Json<SolveResponse>> {
    let submission = Submission::parse(&body).inspect_err(|e| {
        tracing::debug!(error = %e, "Rejected submission");
    })?;

    let submitted_url = submission.url().to_owned();
    let url = submission
        .authorize(&state.config.secret)
        .inspect_err(|_| {
            tracing::warn!(url = %submitted_url, "Rejected submission with invalid secret");
        })?;

    let request_id = RequestId::new();
    tracing::info!(%request_id, url = %url, "Secret verified, starting background task");

    state.dispatcher.dispatch(request_id, url)?;

    Ok(Json(SolveResponse {
        status: "ok",
        request_id,
        message: "Task scheduled in background",
    }))
}
