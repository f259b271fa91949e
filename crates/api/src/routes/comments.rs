//! Routes for the comments resource, mounted at `/comments`.

use axum::routing::patch;
use axum::Router;

use crate::handlers::comments;
use crate::state::AppState;

/// ```text
/// PATCH  /{comment_id}  -> patch_comment_votes
/// DELETE /{comment_id}  -> delete_comment
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{comment_id}",
        patch(comments::patch_comment_votes).delete(comments::delete_comment),
    )
}
