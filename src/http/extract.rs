//! Request body extraction.
//!
//! # Design Decisions
//! - An empty body is treated as `{}`, so missing fields become absent
//!   rather than rejecting the request
//! - Content-Type is not required; the body is parsed as JSON regardless
//! - Parse failures map to `ApiError::MalformedBody`; bodies over the
//!   configured limit map to `ApiError::PayloadTooLarge`

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;

use crate::http::error::ApiError;

/// Lenient JSON body extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ApiError::PayloadTooLarge
            } else {
                ApiError::MalformedBody(e.body_text())
            }
        })?;
        parse_body(&bytes).map(JsonBody)
    }
}

/// Parse a raw body, treating an empty or whitespace-only body as default.
pub fn parse_body<T>(bytes: &[u8]) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(bytes).map_err(|e| ApiError::MalformedBody(e.to_string()))
}
