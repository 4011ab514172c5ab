mod access_token;
mod document_ai_adapter;
mod extractor_factory;
mod mock_text_extractor;
mod text_cleaner;

pub use access_token::{
    AccessTokenProvider, CLOUD_PLATFORM_SCOPE, GoogleAccessToken, StaticAccessToken,
};
pub use document_ai_adapter::{
    DocumentAiAdapter, ProcessResponse, ProcessedDocument, processor_url,
};
pub use extractor_factory::{ExtractorFactory, ExtractorFactoryError};
pub use mock_text_extractor::MockTextExtractor;
pub use text_cleaner::clean_extracted_text;
