use std::sync::Arc;

use tokio::sync::{Semaphore, mpsc};
use tracing::Instrument;

use crate::application::ports::{
    AnalyzerError, CachedResult, JobRepository, PitchAnalyzer, ResultCache, TextExtractionError,
    TextExtractor,
};
use crate::domain::{Analysis, Document, Fingerprint, JobId};

pub struct AnalysisMessage {
    pub job_id: JobId,
    pub fingerprint: Fingerprint,
    pub document: Document,
    pub data: Vec<u8>,
}

/// Drains the analysis queue, spawning one task per job. The receive loop
/// never waits on a gateway; `max_concurrent_jobs` only bounds how many
/// spawned tasks are inside the pipeline at once.
pub struct AnalysisWorker {
    receiver: mpsc::Receiver<AnalysisMessage>,
    processor: Arc<JobProcessor>,
    permits: Arc<Semaphore>,
}

impl AnalysisWorker {
    pub fn new(
        receiver: mpsc::Receiver<AnalysisMessage>,
        processor: JobProcessor,
        max_concurrent_jobs: usize,
    ) -> Self {
        Self {
            receiver,
            processor: Arc::new(processor),
            permits: Arc::new(Semaphore::new(max_concurrent_jobs.max(1))),
        }
    }

    pub async fn run(mut self) {
        tracing::info!("Analysis worker started");
        while let Some(msg) = self.receiver.recv().await {
            let span = tracing::info_span!(
                "analysis_job",
                job_id = %msg.job_id,
                filename = %msg.document.filename,
                fingerprint = %msg.fingerprint.short(),
            );
            let processor = Arc::clone(&self.processor);
            let permits = Arc::clone(&self.permits);

            tokio::spawn(
                async move {
                    match permits.acquire_owned().await {
                        Ok(_permit) => processor.process(msg).await,
                        Err(e) => processor.abandon(msg.job_id, &e.to_string()).await,
                    }
                }
                .instrument(span),
            );
        }
        tracing::info!("Analysis worker stopped: channel closed");
    }
}

/// Runs extraction then analysis for one job and records the terminal state.
pub struct JobProcessor {
    text_extractor: Arc<dyn TextExtractor>,
    analyzer: Arc<dyn PitchAnalyzer>,
    job_repository: Arc<dyn JobRepository>,
    result_cache: Arc<dyn ResultCache>,
}

impl JobProcessor {
    pub fn new(
        text_extractor: Arc<dyn TextExtractor>,
        analyzer: Arc<dyn PitchAnalyzer>,
        job_repository: Arc<dyn JobRepository>,
        result_cache: Arc<dyn ResultCache>,
    ) -> Self {
        Self {
            text_extractor,
            analyzer,
            job_repository,
            result_cache,
        }
    }

    pub async fn process(&self, msg: AnalysisMessage) {
        let AnalysisMessage {
            job_id,
            fingerprint,
            document,
            data,
        } = msg;

        tracing::info!("Starting analysis");

        match self.run_pipeline(&data, &document).await {
            Ok(analysis) => {
                if let Err(e) = self.job_repository.complete(job_id, analysis.clone()).await {
                    tracing::error!(job_id = %job_id, error = %e, "Failed to record completed job");
                    return;
                }
                self.result_cache
                    .put(
                        fingerprint,
                        CachedResult {
                            filename: document.filename,
                            analysis,
                        },
                    )
                    .await;
                tracing::info!(job_id = %job_id, "Analysis completed and cached");
            }
            Err(e) => {
                tracing::error!(job_id = %job_id, error = %e, "Analysis job failed");
                self.record_failure(job_id, &e.to_string()).await;
            }
        }
    }

    async fn abandon(&self, job_id: JobId, reason: &str) {
        tracing::error!(job_id = %job_id, reason, "Analysis job could not be scheduled");
        self.record_failure(job_id, "Analysis worker unavailable")
            .await;
    }

    async fn run_pipeline(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<Analysis, ProcessingError> {
        let text = self
            .text_extractor
            .extract_text(data, document)
            .await
            .map_err(ProcessingError::Extraction)?;
        tracing::debug!(chars = text.len(), "Text extracted");

        let analysis = self
            .analyzer
            .analyze(&text)
            .await
            .map_err(ProcessingError::Analysis)?;
        tracing::debug!("Pitch deck analyzed");

        Ok(analysis)
    }

    async fn record_failure(&self, job_id: JobId, message: &str) {
        if let Err(e) = self.job_repository.fail(job_id, message).await {
            tracing::error!(job_id = %job_id, error = %e, "Failed to record failed job");
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("text extraction failed: {0}")]
    Extraction(TextExtractionError),
    #[error("analysis failed: {0}")]
    Analysis(AnalyzerError),
}
