//! Request timing middleware.
//!
//! Logs `"[METHOD] path"` with the elapsed time once the downstream stages
//! have produced a response, whether that response is a success or a
//! short-circuited error. Never alters the request or the response.

use std::time::Instant;

use axum::{
    body::Body,
    http::{Method, Request},
    middleware::Next,
    response::Response,
};

use crate::observability::metrics;

/// Label identifying a request in the timing log.
pub fn request_label(method: &Method, path: &str) -> String {
    format!("[{}] {}", method, path)
}

pub async fn request_log_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let label = request_label(&method, request.uri().path());
    let start = Instant::now();

    tracing::debug!(request = %label, "Request started");

    let response = next.run(request).await;

    let status = response.status();
    tracing::info!(
        request = %label,
        status = status.as_u16(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Request completed"
    );
    metrics::record_request(method.as_str(), status.as_u16(), start);

    response
}
