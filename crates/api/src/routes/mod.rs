//! Route definitions for the public API.

pub mod articles;
pub mod comments;
pub mod health;
pub mod topics;
pub mod users;

use axum::routing::get;
use axum::Router;

use crate::handlers::meta;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// GET    /                                -> api_index
/// GET    /topics                          -> list_topics
/// POST   /topics                          -> create_topic
/// GET    /articles                        -> list_articles
/// POST   /articles                        -> create_article
/// GET    /articles/{article_id}           -> get_article
/// PATCH  /articles/{article_id}           -> patch_article_votes
/// DELETE /articles/{article_id}           -> delete_article
/// GET    /articles/{article_id}/comments  -> list_article_comments
/// POST   /articles/{article_id}/comments  -> create_comment
/// PATCH  /comments/{comment_id}           -> patch_comment_votes
/// DELETE /comments/{comment_id}           -> delete_comment
/// GET    /users                           -> list_users
/// GET    /users/{username}                -> get_user
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(meta::api_index))
        .nest("/topics", topics::router())
        .nest("/articles", articles::router())
        .nest("/comments", comments::router())
        .nest("/users", users::router())
}
