//! Request ID middleware.
//!
//! Every request runs inside a `request` span carrying its ID, so events
//! logged by handlers and by the content store correlate. The ID is echoed
//! back in the `x-request-id` response header.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest client-supplied ID that is reused as-is
const MAX_REQUEST_ID_LEN: usize = 128;

/// Reuse the caller's request ID when it is sane, otherwise generate one
fn get_or_generate_request_id(headers: &axum::http::HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty() && s.len() <= MAX_REQUEST_ID_LEN)
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// Middleware that scopes each request in a span and tags the response
///
/// # Example
///
/// ```no_run
/// use axum::{Router, routing::get, middleware};
/// use cr_server::api::request_id::request_id_middleware;
///
/// let app: Router = Router::new()
///     .route("/", get(|| async { "Hello" }))
///     .layer(middleware::from_fn(request_id_middleware));
/// ```
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = get_or_generate_request_id(request.headers());
    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
    );

    let started = Instant::now();
    let mut response = next.run(request).instrument(span.clone()).await;

    if let Ok(header_value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, header_value);
    }

    span.in_scope(|| {
        tracing::debug!(
            status = %response.status(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Request completed"
        );
    });

    response
}
