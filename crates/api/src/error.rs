use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use solver_core::error::CoreError;

use crate::engine::DispatchError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for submission validation failures and
/// [`DispatchError`] for scheduling failures. Implements [`IntoResponse`]
/// to produce consistent JSON error responses of the form
/// `{ "detail": ..., "code": ... }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `solver_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The background dispatcher refused the task.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Core(core) => match core {
                CoreError::MalformedBody => (StatusCode::BAD_REQUEST, "MALFORMED_BODY"),
                CoreError::InvalidShape => (StatusCode::BAD_REQUEST, "INVALID_SHAPE"),
                CoreError::MissingField(_) => (StatusCode::BAD_REQUEST, "MISSING_FIELD"),
                CoreError::InvalidField(_) => (StatusCode::BAD_REQUEST, "INVALID_FIELD"),
                CoreError::Forbidden => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            },
            AppError::Dispatch(DispatchError::Closed) => {
                (StatusCode::SERVICE_UNAVAILABLE, "SHUTTING_DOWN")
            }
        };

        let body = json!({
            "detail": self.to_string(),
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
