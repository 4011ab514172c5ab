mod gemini_client;
mod llm_client_factory;
mod mock_llm_client;
mod openai_client;
mod response;

pub use gemini_client::{GEMINI_BASE_URL, GeminiClient, GenerateContentResponse};
pub use llm_client_factory::create_llm_client;
pub use mock_llm_client::{MockLlmClient, SAMPLE_ANALYSIS_JSON};
pub use openai_client::{ChatCompletionResponse, OPENAI_BASE_URL, OpenAiClient};
