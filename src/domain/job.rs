use chrono::{DateTime, Utc};

use super::{Analysis, JobId, JobStatus};

/// Where a job stands. Completed jobs always carry their analysis and failed
/// jobs always carry the error that ended them.
#[derive(Debug, Clone, PartialEq)]
pub enum JobOutcome {
    Processing,
    Completed(Analysis),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub id: JobId,
    pub filename: String,
    pub outcome: JobOutcome,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    pub fn new(filename: String) -> Self {
        Self::with_outcome(filename, JobOutcome::Processing)
    }

    /// A job that starts out finished, used when a result is served from cache.
    pub fn completed(filename: String, analysis: Analysis) -> Self {
        Self::with_outcome(filename, JobOutcome::Completed(analysis))
    }

    fn with_outcome(filename: String, outcome: JobOutcome) -> Self {
        let now = Utc::now();
        Self {
            id: JobId::new(),
            filename,
            outcome,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn status(&self) -> JobStatus {
        match self.outcome {
            JobOutcome::Processing => JobStatus::Processing,
            JobOutcome::Completed(_) => JobStatus::Completed,
            JobOutcome::Failed(_) => JobStatus::Failed,
        }
    }

    pub fn analysis(&self) -> Option<&Analysis> {
        match &self.outcome {
            JobOutcome::Completed(analysis) => Some(analysis),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.outcome {
            JobOutcome::Failed(error) => Some(error),
            _ => None,
        }
    }

    pub fn complete(&mut self, analysis: Analysis) -> Result<(), JobTransitionError> {
        self.finish(JobOutcome::Completed(analysis))
    }

    pub fn fail(&mut self, error: impl Into<String>) -> Result<(), JobTransitionError> {
        self.finish(JobOutcome::Failed(error.into()))
    }

    fn finish(&mut self, outcome: JobOutcome) -> Result<(), JobTransitionError> {
        let current = self.status();
        if current.is_terminal() {
            return Err(JobTransitionError::AlreadyTerminal {
                id: self.id,
                status: current,
            });
        }
        self.outcome = outcome;
        self.updated_at = Utc::now();
        Ok(())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum JobTransitionError {
    #[error("job {id} is already {status}")]
    AlreadyTerminal { id: JobId, status: JobStatus },
}
