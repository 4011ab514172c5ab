mod analysis;
mod document;
mod fingerprint;
mod job;
mod job_id;
mod job_status;

pub use analysis::{Analysis, AnalysisSchemaError, REQUIRED_FIELDS};
pub use document::{ContentType, Document};
pub use fingerprint::Fingerprint;
pub use job::{Job, JobOutcome, JobTransitionError};
pub use job_id::JobId;
pub use job_status::JobStatus;
