use std::sync::Arc;
use std::time::Duration;

use super::access_token::{AccessTokenProvider, GoogleAccessToken, StaticAccessToken};
use super::document_ai_adapter::{DocumentAiAdapter, processor_url};
use crate::application::ports::TextExtractor;
use crate::presentation::config::ExtractionSettings;

#[derive(Debug, thiserror::Error)]
pub enum ExtractorFactoryError {
    #[error("extraction.project_id is required for Document AI")]
    MissingProjectId,
    #[error("extraction.processor_id is required for Document AI")]
    MissingProcessorId,
    #[error("extractor initialization failed: {0}")]
    InitializationFailed(String),
}

pub struct ExtractorFactory;

impl ExtractorFactory {
    pub fn create(
        settings: &ExtractionSettings,
    ) -> Result<Arc<dyn TextExtractor>, ExtractorFactoryError> {
        let url = match non_blank(&settings.api_endpoint) {
            Some(endpoint) => endpoint.to_string(),
            None => {
                let project_id = non_blank(&settings.project_id)
                    .ok_or(ExtractorFactoryError::MissingProjectId)?;
                let processor_id = non_blank(&settings.processor_id)
                    .ok_or(ExtractorFactoryError::MissingProcessorId)?;
                processor_url(&settings.location, project_id, processor_id)
            }
        };

        let token_provider: Arc<dyn AccessTokenProvider> = match non_blank(&settings.access_token) {
            Some(token) => {
                tracing::warn!("Using static extraction.access_token; it will not be refreshed");
                Arc::new(StaticAccessToken::new(token))
            }
            None => Arc::new(GoogleAccessToken::new()),
        };

        tracing::info!(url = %url, "Loading Document AI text extractor");
        let adapter = DocumentAiAdapter::new(
            &url,
            token_provider,
            Duration::from_secs(settings.request_timeout_secs),
        )
        .map_err(|e| ExtractorFactoryError::InitializationFailed(e.to_string()))?;

        Ok(Arc::new(adapter))
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
