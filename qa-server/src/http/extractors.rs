//! Custom Axum extractors
//!
//! Both reject with `ApiError::BadRequest` so every parse failure is a 400.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Numeric id taken from the `{id}` path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidId(pub i64);

impl ValidId {
    /// Parse a decimal id, optionally signed.
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        raw.parse::<i64>()
            .map(Self)
            .map_err(|_| ApiError::bad_request("bad id"))
    }
}

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::bad_request("bad id"))?;

        Self::parse(&id)
    }
}

/// JSON request body parsed from raw bytes.
///
/// Unlike `axum::Json` this ignores `Content-Type` and reports every
/// decoding failure as 400. A literal `null` yields `T::default()`.
pub struct JsonBody<T>(pub T);

impl<T> JsonBody<T>
where
    T: DeserializeOwned + Default,
{
    pub fn parse(bytes: &[u8]) -> Result<Self, ApiError> {
        serde_json::from_slice::<Option<T>>(bytes)
            .map(|body| Self(body.unwrap_or_default()))
            .map_err(|e| {
                tracing::debug!("rejected request body: {}", e);
                ApiError::bad_request("bad request")
            })
    }
}

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| ApiError::bad_request("bad request"))?;

        Self::parse(&bytes)
    }
}
