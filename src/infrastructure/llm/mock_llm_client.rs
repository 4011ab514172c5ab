use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{LlmClient, LlmClientError};

pub const SAMPLE_ANALYSIS_JSON: &str = r#"```json
{
    "company_name": "InnovateTech - Revolutionizing the future of AI",
    "problem": "Businesses struggle to analyze large datasets efficiently.",
    "solution": "A scalable and intuitive platform for data analysis.",
    "market_size": "$200 billion global data analytics market by 2025",
    "business_model": "Subscription-based service with tiered pricing",
    "team_info": "10 experts in AI and data science",
    "funding_ask": 2000000,
    "revenue_projection": "$5 million ARR within three years"
}
```"#;

/// Replies with a fixed body, by default a fenced, schema-complete analysis.
pub struct MockLlmClient {
    response: String,
    delay: Duration,
}

impl MockLlmClient {
    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::with_response(SAMPLE_ANALYSIS_JSON)
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(
        &self,
        _system_prompt: &str,
        _user_prompt: &str,
    ) -> Result<String, LlmClientError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.response.clone())
    }
}
