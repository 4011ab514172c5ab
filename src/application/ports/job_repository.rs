use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Analysis, Job, JobId};

#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn create(&self, job: &Job) -> Result<(), RepositoryError>;

    async fn get_by_id(&self, id: JobId) -> Result<Option<Job>, RepositoryError>;

    async fn complete(&self, id: JobId, analysis: Analysis) -> Result<(), RepositoryError>;

    async fn fail(&self, id: JobId, error_message: &str) -> Result<(), RepositoryError>;
}
