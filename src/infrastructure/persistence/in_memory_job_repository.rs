use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::application::ports::{JobRepository, RepositoryError};
use crate::domain::{Analysis, Job, JobId, JobTransitionError};

/// Process-lifetime job store. Jobs are never evicted and are lost on restart.
#[derive(Default)]
pub struct InMemoryJobRepository {
    jobs: RwLock<HashMap<JobId, Job>>,
}

impl InMemoryJobRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.jobs.read().await.len()
    }

    async fn transition<F>(&self, id: JobId, apply: F) -> Result<(), RepositoryError>
    where
        F: FnOnce(&mut Job) -> Result<(), JobTransitionError>,
    {
        let mut jobs = self.jobs.write().await;
        let job = jobs
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
        apply(job).map_err(|e| RepositoryError::ConstraintViolation(e.to_string()))
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    #[instrument(skip(self, job), fields(job_id = %job.id))]
    async fn create(&self, job: &Job) -> Result<(), RepositoryError> {
        let mut jobs = self.jobs.write().await;
        if jobs.contains_key(&job.id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "job {} already exists",
                job.id
            )));
        }
        jobs.insert(job.id, job.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: JobId) -> Result<Option<Job>, RepositoryError> {
        Ok(self.jobs.read().await.get(&id).cloned())
    }

    #[instrument(skip(self, analysis), fields(job_id = %id))]
    async fn complete(&self, id: JobId, analysis: Analysis) -> Result<(), RepositoryError> {
        self.transition(id, |job| job.complete(analysis)).await
    }

    #[instrument(skip(self), fields(job_id = %id))]
    async fn fail(&self, id: JobId, error_message: &str) -> Result<(), RepositoryError> {
        self.transition(id, |job| job.fail(error_message)).await
    }
}
