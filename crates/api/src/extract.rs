//! Custom extractors that reject with the API's `{"msg": ...}` error bodies.
//!
//! Axum's built-in `Path` and `Json` rejections produce plain-text bodies;
//! these wrappers convert malformed path ids and request bodies into
//! [`ApiError`] so every error response shares the same JSON shape.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use newswire_core::types::DbId;

use crate::error::ApiError;

/// Path extractor for a single numeric id segment.
///
/// Rejects non-numeric ids with 400 `"Bad request."`.
pub struct PathId(pub DbId);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::BadRequest("Bad request."))?;

        raw.parse::<DbId>()
            .map(PathId)
            .map_err(|_| ApiError::BadRequest("Bad request."))
    }
}

/// JSON body extractor that rejects malformed or mistyped bodies with
/// 400 `"Bad request."`.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|_| ApiError::BadRequest("Bad request."))?;

        Ok(ApiJson(value))
    }
}
