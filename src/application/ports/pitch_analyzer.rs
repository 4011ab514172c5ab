use async_trait::async_trait;

use super::LlmClientError;
use crate::domain::{Analysis, AnalysisSchemaError};

/// Extracts the structured pitch-deck fields from plain text.
#[async_trait]
pub trait PitchAnalyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<Analysis, AnalyzerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    #[error("model call failed: {0}")]
    Llm(#[from] LlmClientError),
    #[error("invalid model output: {0}")]
    Schema(#[from] AnalysisSchemaError),
}
