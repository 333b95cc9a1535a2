//! Project id validation middleware.
//!
//! Applied as a route layer on `/projects/{id}` only. A malformed or
//! undecodable id ends the request with `ApiError::InvalidId`; the handler
//! never runs and the store is never touched.

use axum::{
    body::Body,
    extract::{rejection::PathRejection, Path},
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::http::error::ApiError;
use crate::projects::is_valid_format;

pub async fn validate_id_middleware(
    id: Result<Path<String>, PathRejection>,
    request: Request<Body>,
    next: Next,
) -> Response {
    // A segment that cannot be decoded (e.g. invalid UTF-8) is malformed too.
    let id = match id {
        Ok(Path(id)) => id,
        Err(e) => {
            tracing::warn!(path = %request.uri().path(), error = %e, "Undecodable project id");
            return ApiError::InvalidId.into_response();
        }
    };

    if !is_valid_format(&id) {
        tracing::warn!(id = %id, path = %request.uri().path(), "Rejected malformed project id");
        return ApiError::InvalidId.into_response();
    }

    next.run(request).await
}
