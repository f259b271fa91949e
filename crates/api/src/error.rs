use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use newswire_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for listing-validation failures and adds HTTP- and
/// database-specific variants. Implements [`IntoResponse`] to produce the
/// API's `{"msg": ...}` error bodies.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A validation error from `newswire_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a fixed message.
    #[error("{0}")]
    BadRequest(&'static str),

    /// A missing resource with a fixed message.
    #[error("{0}")]
    NotFound(&'static str),
}

/// Convenience type alias for handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::Core(core) => (StatusCode::BAD_REQUEST, core.to_string()),
            ApiError::Database(err) => classify_sqlx_error(err),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, (*msg).to_string()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, (*msg).to_string()),
        };

        let body = json!({ "msg": msg });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and message.
///
/// PostgreSQL constraint violations map to the API's fixed 400 messages.
/// Everything unrecognized maps to 500 with the details logged but kept
/// out of the response body.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Not found.".to_string()),
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            // unique_violation: the only unique key reachable by inserts is topics.slug
            Some("23505") => (
                StatusCode::BAD_REQUEST,
                "Topic already exists.".to_string(),
            ),
            // not_null_violation: a required body field arrived as NULL
            Some("23502") => (
                StatusCode::BAD_REQUEST,
                "Missing required information.".to_string(),
            ),
            // foreign_key_violation / invalid_text_representation
            Some("23503") | Some("22P02") => {
                (StatusCode::BAD_REQUEST, "Bad request.".to_string())
            }
            // invalid LIMIT / OFFSET values
            Some("2201W") | Some("2201X") => (
                StatusCode::BAD_REQUEST,
                "Limit and p must be positive integers.".to_string(),
            ),
            _ => {
                tracing::error!(error = %db_err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error.".to_string(),
                )
            }
        },
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error.".to_string(),
            )
        }
    }
}
