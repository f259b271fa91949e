//! HTTP-level integration tests for the API index and unknown paths.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn api_index_describes_every_endpoint(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    for key in [
        "GET /api",
        "GET /api/topics",
        "POST /api/topics",
        "GET /api/articles",
        "POST /api/articles",
        "GET /api/articles/:article_id",
        "PATCH /api/articles/:article_id",
        "DELETE /api/articles/:article_id",
        "GET /api/articles/:article_id/comments",
        "POST /api/articles/:article_id/comments",
        "PATCH /api/comments/:comment_id",
        "DELETE /api/comments/:comment_id",
        "GET /api/users",
        "GET /api/users/:username",
    ] {
        assert!(json[key].is_object(), "missing endpoint entry: {key}");
    }
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn unknown_path_returns_json_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/topiczz").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["msg"], "Path not found.");
}
