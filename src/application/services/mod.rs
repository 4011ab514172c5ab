mod analysis_service;
mod analysis_worker;
mod pitch_analyzer;

pub use analysis_service::{AnalysisService, AnalysisServiceError, SubmitOutcome};
pub use analysis_worker::{AnalysisMessage, AnalysisWorker, JobProcessor, ProcessingError};
pub use pitch_analyzer::{LlmPitchAnalyzer, SYSTEM_PROMPT, build_extraction_prompt};
