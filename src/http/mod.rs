//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, tower-http layers)
//!     → middleware/request_log.rs (timing, wraps everything below)
//!     → middleware/validate_id.rs (only /projects/{id})
//!     → extract.rs (lenient JSON body)
//!     → handlers.rs (reads/mutates the project store)
//!     → error.rs (ApiError → JSON error response)
//! ```

pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod server;

pub use error::{ApiError, ErrorBody};
pub use server::{AppState, HttpServer};
