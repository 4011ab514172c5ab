mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    CacheSettings, ExtractionSettings, LlmProvider, LlmSettings, LoggingSettings,
    ScaffoldSettings, ServerSettings, Settings, UploadSettings, WorkerSettings,
};
