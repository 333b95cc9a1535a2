//! Client-facing errors.
//!
//! Every error the pipeline can produce is a client error: it ends the
//! request with a 4xx status (400 except for oversized bodies) and a
//! `{"error": "..."}` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Errors surfaced by middleware and handlers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Path id does not have the canonical identifier shape.
    #[error("Invalid project ID.")]
    InvalidId,

    /// Well-formed id with no matching project.
    #[error("project not found")]
    NotFound,

    /// Request body is not a JSON object of optional string fields.
    #[error("Malformed request body.")]
    MalformedBody(String),

    /// Request body exceeded `limits.max_body_size`.
    #[error("Request body too large.")]
    PayloadTooLarge,
}

/// JSON body of an error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::MalformedBody(detail) = &self {
            tracing::debug!(detail = %detail, "Rejected request body");
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
