//! Routes for the users resource, mounted at `/users`.

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// ```text
/// GET /             -> list_users
/// GET /{username}   -> get_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list_users))
        .route("/{username}", get(users::get_user))
}
