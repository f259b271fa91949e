//! Handlers for the users resource.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use newswire_db::repositories::UserRepo;

use crate::error::{ApiError, ApiResult};
use crate::response::{UserListResponse, UserResponse};
use crate::state::AppState;

/// GET /api/users
///
/// List all usernames.
pub async fn list_users(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let users = UserRepo::list(&state.pool).await?;

    Ok(Json(UserListResponse { users }))
}

/// GET /api/users/{username}
///
/// Get a single user.
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let user = UserRepo::find_by_username(&state.pool, &username)
        .await?
        .ok_or(ApiError::NotFound("No user found."))?;

    Ok(Json(UserResponse { user }))
}
