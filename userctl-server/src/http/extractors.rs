//! Custom Axum extractors
//!
//! Rejections are turned into [`ApiError::BadRequest`] so every client
//! error shares the same 400 shape.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Extract and parse the `{id}` path segment as an integer.
///
/// Parsed as `i64` so out-of-range ids fall through to a lookup that
/// matches nothing, rather than a 400.
#[derive(Debug, Clone, Copy)]
pub struct UserId(pub i64);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        raw.parse()
            .map(Self)
            .map_err(|_| ApiError::BadRequest(format!("invalid user id '{}'", raw)))
    }
}

/// JSON body whose rejection is a 400 instead of axum's 415/422
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        Ok(Self(value))
    }
}
