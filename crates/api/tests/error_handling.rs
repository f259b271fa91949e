//! Tests for `ApiError` → HTTP response mapping.
//!
//! These tests verify that each `ApiError` variant produces the correct
//! HTTP status code and `{"msg": ...}` body. They do NOT need an HTTP
//! server -- they call `IntoResponse` directly on `ApiError` values.

use assert_matches::assert_matches;
use axum::response::IntoResponse;
use http_body_util::BodyExt;

use newswire_api::error::ApiError;
use newswire_core::error::CoreError;

/// Helper: convert an `ApiError` into its status code and parsed JSON body.
async fn error_to_response(err: ApiError) -> (axum::http::StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: NotFound carries its message verbatim with a 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_returns_404_with_message() {
    let err = ApiError::NotFound("Article not found.");

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    assert_eq!(json["msg"], "Article not found.");
}

// ---------------------------------------------------------------------------
// Test: BadRequest carries its message verbatim with a 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bad_request_returns_400_with_message() {
    let err = ApiError::BadRequest("No updates requested.");

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["msg"], "No updates requested.");
}

// ---------------------------------------------------------------------------
// Test: CoreError validation failures map to 400 with their own messages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn core_validation_errors_return_400() {
    let err = ApiError::from(CoreError::InvalidSortColumn("height".into()));
    assert_matches!(err, ApiError::Core(_));

    let (status, json) = error_to_response(err).await;
    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(
        json["msg"],
        "Unable to sort. Sorting by height is an invalid request."
    );

    let (status, json) =
        error_to_response(ApiError::from(CoreError::ListParamOutOfRange)).await;
    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["msg"], "Limit and p must be positive integers.");
}

// ---------------------------------------------------------------------------
// Test: sqlx RowNotFound maps to 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sqlx_row_not_found_returns_404() {
    let err = ApiError::Database(sqlx::Error::RowNotFound);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    assert_eq!(json["msg"], "Not found.");
}

// ---------------------------------------------------------------------------
// Test: unclassified sqlx errors map to 500 and sanitize the message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unclassified_database_error_returns_500_and_sanitizes() {
    let err = ApiError::Database(sqlx::Error::PoolTimedOut);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["msg"], "Internal Server Error.");

    // The response body must NOT contain driver-level details.
    assert!(!json.to_string().contains("pool"));
}
