use axum::extract::Request;
use axum::http::HeaderMap;
use tracing::Span;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// The caller's request id, if it sent a non-blank one.
pub fn header_request_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// Span for one HTTP request. The id header is set before tracing runs, so
/// every request is tagged even when the client sent none.
pub fn make_request_span<B>(request: &Request<B>) -> Span {
    let request_id = header_request_id(request.headers()).unwrap_or_else(|| "-".to_string());
    tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri().path()
    )
}
