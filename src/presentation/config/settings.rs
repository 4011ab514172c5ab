use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub upload: UploadSettings,
    pub cache: CacheSettings,
    pub worker: WorkerSettings,
    pub extraction: ExtractionSettings,
    pub llm: LlmSettings,
    pub logging: LoggingSettings,
    pub scaffold: ScaffoldSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub max_file_size_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    pub max_entries: u64,
    pub ttl_seconds: u64,
}

impl CacheSettings {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkerSettings {
    pub queue_capacity: usize,
    pub max_concurrent_jobs: usize,
}

/// Google Cloud Document AI processor used for text extraction.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionSettings {
    pub project_id: Option<String>,
    pub location: String,
    pub processor_id: Option<String>,
    /// Fixed bearer token for emulators and tests. When unset, tokens come
    /// from Application Default Credentials and are refreshed automatically.
    pub access_token: Option<String>,
    /// Full `:process` URL; overrides the one derived from project and location.
    pub api_endpoint: Option<String>,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    Gemini,
    #[serde(rename = "openai")]
    OpenAi,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub provider: LlmProvider,
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: Option<String>,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

/// Runs the service against in-process mock gateways, no cloud credentials needed.
#[derive(Debug, Clone, Deserialize)]
pub struct ScaffoldSettings {
    pub enabled: bool,
    pub mock_response_delay_ms: u64,
}

impl Settings {
    /// Defaults, then `appsettings.{Environment}` (optional), then `APP__SECTION__KEY`
    /// environment variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::builder(environment)?.build()?.try_deserialize()
    }

    fn builder(
        environment: Environment,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("upload.max_file_size_bytes", 10 * 1024 * 1024)?
            .set_default("cache.max_entries", 100)?
            .set_default("cache.ttl_seconds", 3600)?
            .set_default("worker.queue_capacity", 64)?
            .set_default("worker.max_concurrent_jobs", 4)?
            .set_default("extraction.location", "us")?
            .set_default("extraction.request_timeout_secs", 120)?
            .set_default("llm.provider", "gemini")?
            .set_default("llm.model", "gemini-1.5-flash")?
            .set_default("llm.temperature", 0.2)?
            .set_default("llm.max_output_tokens", 2048)?
            .set_default("llm.request_timeout_secs", 120)?
            .set_default("logging.level", "info,deck_analyst=debug,tower_http=debug")?
            .set_default("logging.enable_json", false)?
            .set_default("scaffold.enabled", false)?
            .set_default("scaffold.mock_response_delay_ms", 0)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            ))
    }
}
