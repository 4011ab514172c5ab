use std::time::Duration;

use async_trait::async_trait;

use super::text_cleaner::clean_extracted_text;
use crate::application::ports::{TextExtractionError, TextExtractor};
use crate::domain::Document;

/// Treats the upload as text. Used in scaffold mode and tests.
#[derive(Default)]
pub struct MockTextExtractor {
    delay: Duration,
}

impl MockTextExtractor {
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl TextExtractor for MockTextExtractor {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, TextExtractionError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let text = clean_extracted_text(&String::from_utf8_lossy(data));
        if text.is_empty() {
            return Err(TextExtractionError::NoTextFound(document.filename.clone()));
        }
        Ok(text)
    }
}
