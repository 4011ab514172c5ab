use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::application::ports::LlmClientError;
use crate::infrastructure::observability::sanitize_prompt;

/// Decodes a provider reply, mapping 429 and other non-2xx statuses first.
/// Error bodies are sanitized since some providers echo the request key back.
pub(super) async fn decode_reply<T: DeserializeOwned>(
    sent: Result<Response, reqwest::Error>,
) -> Result<T, LlmClientError> {
    let response = sent.map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

    match response.status() {
        StatusCode::TOO_MANY_REQUESTS => Err(LlmClientError::RateLimited),
        status if !status.is_success() => {
            let body = response.text().await.unwrap_or_default();
            Err(LlmClientError::ApiRequestFailed(format!(
                "HTTP {status}: {}",
                sanitize_prompt(&body)
            )))
        }
        _ => response
            .json()
            .await
            .map_err(|e| LlmClientError::InvalidResponse(e.to_string())),
    }
}
