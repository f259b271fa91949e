//! Handlers for the articles resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use newswire_core::listing::{self, SortColumn, SortOrder};
use newswire_db::models::article::{ArticleFilter, CreateArticle, UpdateArticleVotes};
use newswire_db::repositories::{ArticleRepo, TopicRepo};

use crate::error::{ApiError, ApiResult};
use crate::extract::{ApiJson, PathId};
use crate::response::{ArticleListResponse, ArticleResponse};
use crate::state::AppState;

/// Query parameters for listing articles. Raw strings here; validation
/// happens in `newswire_core::listing`.
#[derive(Debug, serde::Deserialize)]
pub struct ArticleListParams {
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub topic: Option<String>,
    pub limit: Option<String>,
    pub p: Option<String>,
}

/// GET /api/articles?sort_by=&order=&topic=&limit=&p=
///
/// List article summaries with a total count of all matching rows. A
/// requested topic must exist; an empty page past the first is treated
/// as exhausted pagination.
pub async fn list_articles(
    State(state): State<AppState>,
    Query(params): Query<ArticleListParams>,
) -> ApiResult<impl IntoResponse> {
    let sort = SortColumn::parse(params.sort_by.as_deref())?;
    let order = SortOrder::parse(params.order.as_deref())?;
    let limit = listing::parse_limit(params.limit.as_deref())?;
    let page = listing::parse_page(params.p.as_deref())?;

    if let Some(topic) = params.topic.as_deref() {
        if !TopicRepo::exists(&state.pool, topic).await? {
            return Err(ApiError::NotFound("Topic not found."));
        }
    }

    let filter = ArticleFilter {
        topic: params.topic,
        sort,
        order,
        limit,
        offset: listing::page_offset(limit, page),
    };

    let (articles, total_count) = tokio::try_join!(
        ArticleRepo::list(&state.pool, &filter),
        ArticleRepo::count(&state.pool, filter.topic.as_deref()),
    )?;

    if articles.is_empty() && page > 1 {
        return Err(ApiError::NotFound(
            "Reached end of articles. Please lower your limit or p values.",
        ));
    }

    Ok(Json(ArticleListResponse {
        articles,
        total_count,
    }))
}

/// POST /api/articles
///
/// Create a new article. Missing fields and unknown author/topic values
/// surface as database constraint violations. The response carries the
/// full article shape, refetched so `comment_count` is present.
pub async fn create_article(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateArticle>,
) -> ApiResult<impl IntoResponse> {
    let article_id = ArticleRepo::create(&state.pool, &input).await?;

    let article = ArticleRepo::find_by_id(&state.pool, article_id)
        .await?
        .ok_or(ApiError::NotFound("Article not found."))?;

    tracing::info!(article_id, "Article created");

    Ok((StatusCode::CREATED, Json(ArticleResponse { article })))
}

/// GET /api/articles/{article_id}
///
/// Get a single article with its comment count.
pub async fn get_article(
    State(state): State<AppState>,
    PathId(article_id): PathId,
) -> ApiResult<impl IntoResponse> {
    let article = ArticleRepo::find_by_id(&state.pool, article_id)
        .await?
        .ok_or(ApiError::NotFound("Article not found."))?;

    Ok(Json(ArticleResponse { article }))
}

/// PATCH /api/articles/{article_id}
///
/// Apply a vote delta. The body must carry `inc_votes`; the response is
/// the bare updated row.
pub async fn patch_article_votes(
    State(state): State<AppState>,
    PathId(article_id): PathId,
    ApiJson(input): ApiJson<UpdateArticleVotes>,
) -> ApiResult<impl IntoResponse> {
    let delta = input
        .inc_votes
        .ok_or(ApiError::BadRequest("No updates requested."))?;

    let article = ArticleRepo::update_votes(&state.pool, article_id, delta)
        .await?
        .ok_or(ApiError::NotFound("Article not found."))?;

    tracing::info!(article_id, delta, "Article votes updated");

    Ok(Json(ArticleResponse { article }))
}

/// DELETE /api/articles/{article_id}
///
/// Delete an article; its comments cascade at the schema level.
pub async fn delete_article(
    State(state): State<AppState>,
    PathId(article_id): PathId,
) -> ApiResult<impl IntoResponse> {
    let deleted = ArticleRepo::delete(&state.pool, article_id).await?;

    if !deleted {
        return Err(ApiError::NotFound("Article not found."));
    }

    tracing::info!(article_id, "Article deleted");

    Ok(StatusCode::NO_CONTENT)
}
