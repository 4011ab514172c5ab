use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::access_token::AccessTokenProvider;
use super::text_cleaner::clean_extracted_text;
use crate::application::ports::{TextExtractionError, TextExtractor};
use crate::domain::Document;
use crate::infrastructure::observability::sanitize_prompt;

/// `:process` URL of a Document AI processor. Locations other than `us`
/// are served from their own regional host.
pub fn processor_url(location: &str, project_id: &str, processor_id: &str) -> String {
    format!(
        "https://{location}-documentai.googleapis.com/v1/projects/{project_id}/locations/{location}/processors/{processor_id}:process"
    )
}

/// Text extraction through a Google Cloud Document AI OCR processor.
pub struct DocumentAiAdapter {
    client: Client,
    process_url: String,
    token_provider: Arc<dyn AccessTokenProvider>,
}

impl DocumentAiAdapter {
    pub fn new(
        process_url: &str,
        token_provider: Arc<dyn AccessTokenProvider>,
        timeout: Duration,
    ) -> Result<Self, TextExtractionError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            TextExtractionError::ExtractionFailed(format!("HTTP client setup failed: {e}"))
        })?;
        Ok(Self {
            client,
            process_url: process_url.to_string(),
            token_provider,
        })
    }

    async fn process(&self, data: &[u8], mime_type: &str) -> Result<String, TextExtractionError> {
        let body = ProcessRequest {
            raw_document: RawDocument {
                content: general_purpose::STANDARD.encode(data),
                mime_type: mime_type.to_string(),
            },
        };

        // Fetched per request; the provider caches and refreshes it.
        let access_token = self.token_provider.access_token().await?;

        let response = self
            .client
            .post(&self.process_url)
            .bearer_auth(access_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                TextExtractionError::ExtractionFailed(format!("Document AI request failed: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(TextExtractionError::ExtractionFailed(format!(
                "Document AI returned {status}: {}",
                sanitize_prompt(&text)
            )));
        }

        let result: ProcessResponse = response.json().await.map_err(|e| {
            TextExtractionError::ExtractionFailed(format!("Document AI response parse failed: {e}"))
        })?;

        Ok(result.into_text())
    }
}

#[async_trait]
impl TextExtractor for DocumentAiAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(filename = %document.filename, bytes = data.len())
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, TextExtractionError> {
        let raw = self.process(data, document.content_type.as_mime()).await?;
        let cleaned = clean_extracted_text(&raw);

        if cleaned.is_empty() {
            return Err(TextExtractionError::NoTextFound(document.filename.clone()));
        }

        tracing::debug!(
            raw_chars = raw.len(),
            cleaned_chars = cleaned.len(),
            "Document AI text cleaned"
        );
        Ok(cleaned)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProcessRequest {
    raw_document: RawDocument,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RawDocument {
    content: String,
    mime_type: String,
}

#[derive(Deserialize)]
pub struct ProcessResponse {
    pub document: Option<ProcessedDocument>,
}

#[derive(Deserialize)]
pub struct ProcessedDocument {
    #[serde(default)]
    pub text: String,
}

impl ProcessResponse {
    pub fn into_text(self) -> String {
        self.document.map(|d| d.text).unwrap_or_default()
    }
}
