//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Request logging middleware produces:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (request counters, latency histograms, store size)
//!
//! Consumers:
//!     → stdout (tracing-subscriber fmt layer)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through the tower-http request-id layers
//! - Metric recording is a no-op until a recorder is installed

pub mod logging;
pub mod metrics;
