use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::ports::{JobRepository, RepositoryError, ResultCache};
use crate::application::services::AnalysisMessage;
use crate::domain::{ContentType, Document, Fingerprint, Job, JobId};

/// Accepts uploads and answers status polls. Extraction and analysis never run
/// here: uncached uploads are handed to the [`AnalysisWorker`] over a channel.
///
/// [`AnalysisWorker`]: crate::application::services::AnalysisWorker
pub struct AnalysisService {
    job_repository: Arc<dyn JobRepository>,
    result_cache: Arc<dyn ResultCache>,
    sender: mpsc::Sender<AnalysisMessage>,
    max_file_size_bytes: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub job_id: JobId,
    pub cached: bool,
}

impl AnalysisService {
    pub fn new(
        job_repository: Arc<dyn JobRepository>,
        result_cache: Arc<dyn ResultCache>,
        sender: mpsc::Sender<AnalysisMessage>,
        max_file_size_bytes: usize,
    ) -> Self {
        Self {
            job_repository,
            result_cache,
            sender,
            max_file_size_bytes,
        }
    }

    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn submit(
        &self,
        data: Vec<u8>,
        declared_mime: &str,
        filename: String,
    ) -> Result<SubmitOutcome, AnalysisServiceError> {
        let content_type = ContentType::from_mime(declared_mime).ok_or_else(|| {
            AnalysisServiceError::InvalidInput(format!(
                "Invalid file type {declared_mime}. Only PDFs are accepted."
            ))
        })?;

        if data.is_empty() {
            return Err(AnalysisServiceError::InvalidInput(
                "Uploaded file is empty".to_string(),
            ));
        }
        if data.len() > self.max_file_size_bytes {
            return Err(AnalysisServiceError::InvalidInput(format!(
                "File exceeds the {} byte upload limit",
                self.max_file_size_bytes
            )));
        }

        let fingerprint = Fingerprint::of(&data);

        if let Some(cached) = self.result_cache.get(&fingerprint).await {
            let job = Job::completed(cached.filename, cached.analysis);
            self.job_repository.create(&job).await?;
            tracing::info!(
                job_id = %job.id,
                fingerprint = %fingerprint.short(),
                "Returning cached analysis under new job"
            );
            return Ok(SubmitOutcome {
                job_id: job.id,
                cached: true,
            });
        }

        let job = Job::new(filename.clone());
        let job_id = job.id;
        self.job_repository.create(&job).await?;

        let msg = AnalysisMessage {
            job_id,
            fingerprint,
            document: Document::new(filename, content_type),
            data,
        };

        if let Err(e) = self.sender.send(msg).await {
            tracing::error!(job_id = %job_id, error = %e, "Failed to enqueue analysis job");
            self.job_repository
                .fail(job_id, "Analysis queue unavailable")
                .await?;
            return Err(AnalysisServiceError::QueueUnavailable);
        }

        tracing::info!(job_id = %job_id, "Analysis job enqueued");

        Ok(SubmitOutcome {
            job_id,
            cached: false,
        })
    }

    pub async fn get_status(&self, job_id: JobId) -> Result<Job, AnalysisServiceError> {
        self.job_repository
            .get_by_id(job_id)
            .await?
            .ok_or(AnalysisServiceError::NotFound(job_id))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisServiceError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("Job ID not found: {0}")]
    NotFound(JobId),
    #[error("analysis queue unavailable")]
    QueueUnavailable,
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}
