use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{AnalyzerError, LlmClient, PitchAnalyzer};
use crate::domain::Analysis;
use crate::infrastructure::observability::sanitize_prompt;

pub const SYSTEM_PROMPT: &str = "You are an analyst who reads startup pitch decks and extracts \
key facts. Reply with a single JSON object and no commentary.";

/// Semantic extraction over any chat model. The model's reply is untrusted
/// and goes through [`Analysis::from_model_output`] before it is returned.
pub struct LlmPitchAnalyzer<L: ?Sized>
where
    L: LlmClient,
{
    llm_client: Arc<L>,
}

impl<L: ?Sized> LlmPitchAnalyzer<L>
where
    L: LlmClient,
{
    pub fn new(llm_client: Arc<L>) -> Self {
        Self { llm_client }
    }
}

#[async_trait]
impl<L: ?Sized> PitchAnalyzer for LlmPitchAnalyzer<L>
where
    L: LlmClient + 'static,
{
    #[tracing::instrument(skip(self, text), fields(chars = text.len()))]
    async fn analyze(&self, text: &str) -> Result<Analysis, AnalyzerError> {
        let prompt = build_extraction_prompt(text);
        let raw = self.llm_client.complete(SYSTEM_PROMPT, &prompt).await?;

        Analysis::from_model_output(&raw).map_err(|e| {
            tracing::warn!(
                error = %e,
                output = %sanitize_prompt(&raw),
                "Rejected model output"
            );
            AnalyzerError::Schema(e)
        })
    }
}

pub fn build_extraction_prompt(text: &str) -> String {
    format!(
        r#"Analyze the following text from a startup pitch deck and extract the data points listed below.

Text to analyze:
{text}

Data points:
1. Company name and tagline
2. Problem statement
3. Solution description
4. Market size (TAM/SAM)
5. Business model
6. Team size and key roles
7. Funding ask amount
8. Revenue projections (if mentioned)

Return exactly this JSON shape. Use null for anything the deck does not state.
{{
    "company_name": "string",
    "problem": "string",
    "solution": "string",
    "market_size": "string",
    "business_model": "string",
    "team_info": "string",
    "funding_ask": number,
    "revenue_projection": "string"
}}"#
    )
}
