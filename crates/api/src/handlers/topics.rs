//! Handlers for the topics resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use newswire_db::models::topic::CreateTopic;
use newswire_db::repositories::TopicRepo;

use crate::error::ApiResult;
use crate::extract::ApiJson;
use crate::response::{TopicListResponse, TopicResponse};
use crate::state::AppState;

/// GET /api/topics
///
/// List all topics.
pub async fn list_topics(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let topics = TopicRepo::list(&state.pool).await?;

    Ok(Json(TopicListResponse { topics }))
}

/// POST /api/topics
///
/// Create a new topic. A duplicate slug or a missing field surfaces as a
/// database constraint violation and is classified by the error layer.
pub async fn create_topic(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateTopic>,
) -> ApiResult<impl IntoResponse> {
    let topic = TopicRepo::create(&state.pool, &input).await?;

    tracing::info!(slug = %topic.slug, "Topic created");

    Ok((StatusCode::CREATED, Json(TopicResponse { topic })))
}
