mod job_repository;
mod llm_client;
mod pitch_analyzer;
mod repository_error;
mod result_cache;
mod text_extractor;

pub use job_repository::JobRepository;
pub use llm_client::{LlmClient, LlmClientError};
pub use pitch_analyzer::{AnalyzerError, PitchAnalyzer};
pub use repository_error::RepositoryError;
pub use result_cache::{CachedResult, ResultCache};
pub use text_extractor::{TextExtractionError, TextExtractor};
