use async_trait::async_trait;

use crate::domain::Document;

/// Turns uploaded document bytes into cleaned plain text.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, TextExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TextExtractionError {
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("no valid text content found in {0}")]
    NoTextFound(String),
}
