use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::AnalysisServiceError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn with_status(status: StatusCode, error: impl Into<String>) -> Response {
        (
            status,
            Json(ErrorResponse {
                error: error.into(),
            }),
        )
            .into_response()
    }
}

/// Maps a synchronous service failure onto the HTTP status a client should see.
pub fn service_error_response(e: AnalysisServiceError) -> Response {
    let status = match &e {
        AnalysisServiceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        AnalysisServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        AnalysisServiceError::QueueUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        AnalysisServiceError::Repository(_) => {
            tracing::error!(error = %e, "Job store failure");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    ErrorResponse::with_status(status, e.to_string())
}
