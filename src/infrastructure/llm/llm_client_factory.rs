use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use super::{GEMINI_BASE_URL, GeminiClient, OPENAI_BASE_URL, OpenAiClient};
use crate::application::ports::{LlmClient, LlmClientError};
use crate::presentation::config::{LlmProvider, LlmSettings};

pub fn create_llm_client(settings: &LlmSettings) -> Result<Arc<dyn LlmClient>, LlmClientError> {
    let api_key = settings
        .api_key
        .as_deref()
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .ok_or_else(|| LlmClientError::Configuration("llm.api_key is not set".to_string()))?
        .to_string();

    let client = Client::builder()
        .timeout(Duration::from_secs(settings.request_timeout_secs))
        .build()
        .map_err(|e| LlmClientError::Configuration(e.to_string()))?;

    let client: Arc<dyn LlmClient> = match settings.provider {
        LlmProvider::Gemini => Arc::new(GeminiClient::new(
            client,
            settings.base_url.as_deref().unwrap_or(GEMINI_BASE_URL),
            api_key,
            settings.model.clone(),
            settings.temperature,
            settings.max_output_tokens,
        )),
        LlmProvider::OpenAi => Arc::new(OpenAiClient::new(
            client,
            settings.base_url.as_deref().unwrap_or(OPENAI_BASE_URL),
            api_key,
            settings.model.clone(),
            settings.max_output_tokens,
            settings.temperature,
        )),
    };

    tracing::info!(provider = ?settings.provider, model = %settings.model, "LLM client ready");
    Ok(client)
}
