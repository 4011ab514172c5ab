use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ErrorResponse, service_error_response};
use crate::domain::{Analysis, Job, JobId};
use crate::presentation::state::AppState;

/// Poll payload. `analysis` is present only when completed, `error` only when failed.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AnalysisStatusResponse {
    pub status: String,
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Job> for AnalysisStatusResponse {
    fn from(job: Job) -> Self {
        Self {
            status: job.status().as_str().to_string(),
            analysis: job.analysis().cloned(),
            error: job.error_message().map(String::from),
            created_at: job.created_at,
            updated_at: job.updated_at,
            filename: job.filename,
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn analysis_status_handler(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Response {
    // An id that does not parse was never issued.
    let Ok(id) = job_id.parse::<JobId>() else {
        return ErrorResponse::with_status(
            StatusCode::NOT_FOUND,
            format!("Job ID not found: {}", job_id),
        );
    };

    match state.analysis_service.get_status(id).await {
        Ok(job) => (StatusCode::OK, Json(AnalysisStatusResponse::from(job))).into_response(),
        Err(e) => service_error_response(e),
    }
}
