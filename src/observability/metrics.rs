//! Metrics collection and exposition.
//!
//! # Metrics
//! - `projects_requests_total` (counter): requests by method, status
//! - `projects_request_duration_seconds` (histogram): latency distribution
//! - `projects_store_size` (gauge): projects currently held
//!
//! # Design Decisions
//! - Labels limited to method and status; paths carry ids and would
//!   explode cardinality

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its HTTP scrape listener.
///
/// Must be called from within a tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics recorder"),
    }
}

/// Record a finished request.
pub fn record_request(method: &str, status: u16, start: Instant) {
    let status = status.to_string();
    metrics::counter!(
        "projects_requests_total",
        "method" => method.to_string(),
        "status" => status.clone()
    )
    .increment(1);
    metrics::histogram!(
        "projects_request_duration_seconds",
        "method" => method.to_string(),
        "status" => status
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record the number of projects in the store.
pub fn record_store_size(size: usize) {
    metrics::gauge!("projects_store_size").set(size as f64);
}
