//! Request pipeline middleware.
//!
//! # Pipeline
//! ```text
//! Request → RequestLog(start) → tower-http layers → [IdValidation] → Handler
//!                                                                      ↓
//! Response ← RequestLog(end) ←─────────────────────────────────────────┘
//! ```
//!
//! Each stage is an axum `from_fn` middleware that receives the request and
//! an explicit `Next` continuation. A stage either calls `next.run(req)` to
//! continue or returns a response to short-circuit.
//!
//! | Stage | Scope | Short-circuits |
//! |-------|-------|----------------|
//! | RequestLog | every route | never |
//! | IdValidation | routes with `{id}` | on malformed id |

pub mod request_log;
pub mod validate_id;

pub use request_log::{request_label, request_log_middleware};
pub use validate_id::validate_id_middleware;

/// Pipeline stages in the order a request passes through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    RequestLog,
    IdValidation,
}

impl Stage {
    /// All stages, outermost first.
    pub const fn all() -> [Stage; 2] {
        [Stage::RequestLog, Stage::IdValidation]
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Stage::RequestLog => "request_log",
            Stage::IdValidation => "id_validation",
        }
    }
}
