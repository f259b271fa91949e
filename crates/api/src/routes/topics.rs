//! Routes for the topics resource, mounted at `/topics`.

use axum::routing::get;
use axum::Router;

use crate::handlers::topics;
use crate::state::AppState;

/// ```text
/// GET  /  -> list_topics
/// POST /  -> create_topic
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(topics::list_topics).post(topics::create_topic))
}
