//! HTTP-level integration tests for the comments endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, patch_json, post_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// GET /api/articles/{article_id}/comments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn list_comments_returns_comment_shapes(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/articles/5/comments").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    let comments = json["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 2);
    for comment in comments {
        assert!(comment["comment_id"].is_number());
        assert!(comment["votes"].is_number());
        assert!(comment["created_at"].is_string());
        assert!(comment["author"].is_string());
        assert!(comment["body"].is_string());
        // The parent id is implied by the path and dropped from the payload.
        assert!(comment.get("article_id").is_none());
    }
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn list_comments_newest_first(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/articles/5/comments").await;

    let json = body_json(response).await;
    let dates: Vec<&str> = json["comments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["created_at"].as_str().unwrap())
        .collect();
    assert!(dates.windows(2).all(|w| w[0] >= w[1]));
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn list_comments_for_commentless_article_returns_empty_array(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/articles/2/comments").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["comments"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn list_comments_for_missing_article_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/articles/999/comments").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["msg"], "Article not found.");
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn list_comments_with_non_numeric_article_id_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/articles/notAnID/comments").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["msg"], "Bad request.");
}

// ---------------------------------------------------------------------------
// POST /api/articles/{article_id}/comments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn create_comment_returns_201_with_created_row(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/articles/5/comments",
        serde_json::json!({ "username": "icellusedkars", "body": "just a test" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let comment = &json["comment"];
    assert_eq!(comment["comment_id"], 19);
    assert_eq!(comment["article_id"], 5);
    assert_eq!(comment["author"], "icellusedkars");
    assert_eq!(comment["body"], "just a test");
    assert_eq!(comment["votes"], 0);
    assert!(comment["created_at"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn create_comment_with_empty_body_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/articles/5/comments", serde_json::json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["msg"], "No comment submitted.");
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn create_comment_on_missing_article_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/articles/555/comments",
        serde_json::json!({ "username": "icellusedkars", "body": "just a test" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["msg"], "Article not found.");
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn create_comment_with_non_numeric_article_id_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/articles/notanId/comments",
        serde_json::json!({ "username": "icellusedkars", "body": "just a test" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["msg"], "Bad request.");
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn create_comment_with_unknown_username_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/articles/5/comments",
        serde_json::json!({ "username": "not-a-user", "body": "just a test" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["msg"], "Bad request.");
}

// ---------------------------------------------------------------------------
// DELETE /api/comments/{comment_id}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn delete_comment_returns_204_and_removes_the_row(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = delete(app, "/api/comments/1").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 17);

    let gone: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE comment_id = 1")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(gone, 0);
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn delete_comment_with_non_numeric_id_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/comments/NotAnId").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["msg"], "Bad request.");
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn delete_missing_comment_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/comments/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["msg"], "Comment not found.");
}

// ---------------------------------------------------------------------------
// PATCH /api/comments/{comment_id}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn patch_comment_votes_is_additive(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = patch_json(app, "/api/comments/1", serde_json::json!({ "inc_votes": 5 })).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let comment = &json["comment"];
    assert_eq!(comment["comment_id"], 1);
    assert_eq!(comment["article_id"], 9);
    assert_eq!(comment["author"], "butter_bridge");
    assert_eq!(comment["votes"], 21);

    // Negative delta on top of the previous one.
    let app = common::build_test_app(pool);
    let response = patch_json(app, "/api/comments/1", serde_json::json!({ "inc_votes": -5 })).await;
    let json = body_json(response).await;
    assert_eq!(json["comment"]["votes"], 16);
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn patch_comment_with_empty_body_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = patch_json(app, "/api/comments/1", serde_json::json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["msg"], "No updates requested.");
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn patch_comment_with_non_numeric_delta_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        "/api/comments/1",
        serde_json::json!({ "inc_votes": "not-a-number" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["msg"], "Bad request.");
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn patch_missing_comment_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = patch_json(app, "/api/comments/5555", serde_json::json!({ "inc_votes": 1 })).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["msg"], "Comment not found.");
}
