//! Handlers for the comments resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use newswire_db::models::comment::{CreateComment, UpdateCommentVotes};
use newswire_db::repositories::{ArticleRepo, CommentRepo};

use crate::error::{ApiError, ApiResult};
use crate::extract::{ApiJson, PathId};
use crate::response::{CommentListResponse, CommentResponse};
use crate::state::AppState;

/// GET /api/articles/{article_id}/comments
///
/// List the comments on an article, newest first. The existence check
/// runs alongside the listing query so a missing article yields 404
/// rather than an empty array.
pub async fn list_article_comments(
    State(state): State<AppState>,
    PathId(article_id): PathId,
) -> ApiResult<impl IntoResponse> {
    let (exists, comments) = tokio::try_join!(
        ArticleRepo::exists(&state.pool, article_id),
        CommentRepo::list_by_article(&state.pool, article_id),
    )?;

    if !exists {
        return Err(ApiError::NotFound("Article not found."));
    }

    Ok(Json(CommentListResponse { comments }))
}

/// POST /api/articles/{article_id}/comments
///
/// Post a comment on an article. An entirely empty body is rejected
/// before touching the database; an unknown username surfaces as a
/// foreign-key violation.
pub async fn create_comment(
    State(state): State<AppState>,
    PathId(article_id): PathId,
    ApiJson(input): ApiJson<CreateComment>,
) -> ApiResult<impl IntoResponse> {
    if input.is_empty() {
        return Err(ApiError::BadRequest("No comment submitted."));
    }

    if !ArticleRepo::exists(&state.pool, article_id).await? {
        return Err(ApiError::NotFound("Article not found."));
    }

    let comment = CommentRepo::create(&state.pool, article_id, &input).await?;

    tracing::info!(article_id, comment_id = comment.comment_id, "Comment created");

    Ok((StatusCode::CREATED, Json(CommentResponse { comment })))
}

/// PATCH /api/comments/{comment_id}
///
/// Apply a vote delta. The body must carry `inc_votes`.
pub async fn patch_comment_votes(
    State(state): State<AppState>,
    PathId(comment_id): PathId,
    ApiJson(input): ApiJson<UpdateCommentVotes>,
) -> ApiResult<impl IntoResponse> {
    let delta = input
        .inc_votes
        .ok_or(ApiError::BadRequest("No updates requested."))?;

    let comment = CommentRepo::update_votes(&state.pool, comment_id, delta)
        .await?
        .ok_or(ApiError::NotFound("Comment not found."))?;

    tracing::info!(comment_id, delta, "Comment votes updated");

    Ok(Json(CommentResponse { comment }))
}

/// DELETE /api/comments/{comment_id}
///
/// Delete a comment.
pub async fn delete_comment(
    State(state): State<AppState>,
    PathId(comment_id): PathId,
) -> ApiResult<impl IntoResponse> {
    let deleted = CommentRepo::delete(&state.pool, comment_id).await?;

    if !deleted {
        return Err(ApiError::NotFound("Comment not found."));
    }

    tracing::info!(comment_id, "Comment deleted");

    Ok(StatusCode::NO_CONTENT)
}
