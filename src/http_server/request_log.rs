//! Request logging middleware
//!
//! Emits one `HTTP_REQUEST` line per request and echoes the request id back
//! in `x-request-id`, generating one when the client did not send it.

use std::sync::Arc;
use std::time::Instant;

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use crate::observability::{Event, Logger, MetricsRegistry, Severity};

/// Header carrying the request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub async fn request_log_middleware(
    State(metrics): State<Arc<MetricsRegistry>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let started = Instant::now();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    metrics.increment_requests();
    let mut response = next.run(request).await;

    let status = response.status();
    let severity = if status.is_server_error() {
        Severity::Warn
    } else {
        Severity::Info
    };
    let elapsed_ms = started.elapsed().as_millis().to_string();
    Logger::log(
        severity,
        Event::HttpRequest.as_str(),
        &[
            ("elapsed_ms", &elapsed_ms),
            ("method", &method),
            ("path", &path),
            ("request_id", &request_id),
            ("status", status.as_str()),
        ],
    );

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
