use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use super::{ErrorResponse, service_error_response};
use crate::presentation::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub job_id: String,
    pub cached: bool,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    // The first part carrying a filename is the upload; plain form fields are skipped.
    let (filename, content_type, data) = loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => {
                tracing::warn!("Upload request with no file");
                return ErrorResponse::with_status(StatusCode::BAD_REQUEST, "No file uploaded");
            }
            Err(e) => return multipart_error_response(e, state.max_upload_bytes),
        };

        let Some(filename) = field.file_name().map(String::from) else {
            continue;
        };
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        tracing::debug!(filename = %filename, content_type = %content_type, "Processing file upload");

        match field.bytes().await {
            Ok(data) => break (filename, content_type, data),
            Err(e) => return multipart_error_response(e, state.max_upload_bytes),
        }
    };

    tracing::debug!(bytes = data.len(), "File data received");

    match state
        .analysis_service
        .submit(data.to_vec(), &content_type, filename)
        .await
    {
        Ok(outcome) => (
            StatusCode::OK,
            Json(UploadResponse {
                job_id: outcome.job_id.to_string(),
                cached: outcome.cached,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Upload rejected");
            service_error_response(e)
        }
    }
}

/// Oversized bodies are an input error like any other rejected upload, so the
/// body limit's 413 is reported as 400.
fn multipart_error_response(e: MultipartError, max_upload_bytes: usize) -> Response {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        tracing::warn!(error = %e, "Upload exceeds body limit");
        return ErrorResponse::with_status(
            StatusCode::BAD_REQUEST,
            format!("File exceeds the {max_upload_bytes} byte upload limit"),
        );
    }

    tracing::error!(error = %e, "Failed to read multipart");
    ErrorResponse::with_status(
        e.status(),
        format!("Failed to read multipart: {}", e.body_text()),
    )
}
