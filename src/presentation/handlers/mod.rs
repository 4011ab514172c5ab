mod analysis_status;
mod error_response;
mod health;
mod upload;

pub use analysis_status::{AnalysisStatusResponse, analysis_status_handler};
pub use error_response::{ErrorResponse, service_error_response};
pub use health::health_handler;
pub use upload::{UploadResponse, upload_handler};
