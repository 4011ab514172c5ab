mod init_tracing;
mod prompt_sanitizer;
mod request_id;

pub use init_tracing::{DEFAULT_FILTER, init_tracing};
pub use prompt_sanitizer::sanitize_prompt;
pub use request_id::{REQUEST_ID_HEADER, header_request_id, make_request_span};
