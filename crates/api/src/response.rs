//! Response envelope types for API handlers.
//!
//! Every success body wraps its payload in a named key (`{"articles": ...}`,
//! `{"article": ...}`, ...). Typed envelopes are used instead of ad-hoc
//! `serde_json::json!` values so response shapes are checked at compile time.

use serde::Serialize;

use newswire_db::models::article::ArticleListItem;
use newswire_db::models::comment::{Comment, CommentListItem};
use newswire_db::models::topic::Topic;
use newswire_db::models::user::{User, UserSummary};

/// `{"topics": [...]}`
#[derive(Debug, Serialize)]
pub struct TopicListResponse {
    pub topics: Vec<Topic>,
}

/// `{"topic": {...}}`
#[derive(Debug, Serialize)]
pub struct TopicResponse {
    pub topic: Topic,
}

/// `{"articles": [...], "total_count": N}`
///
/// `total_count` counts every row matching the topic filter, ignoring
/// limit and page.
#[derive(Debug, Serialize)]
pub struct ArticleListResponse {
    pub articles: Vec<ArticleListItem>,
    pub total_count: i64,
}

/// `{"article": {...}}`
///
/// Generic over the article shape: reads include `comment_count`, vote
/// patches return the bare row.
#[derive(Debug, Serialize)]
pub struct ArticleResponse<T: Serialize> {
    pub article: T,
}

/// `{"comments": [...]}`
#[derive(Debug, Serialize)]
pub struct CommentListResponse {
    pub comments: Vec<CommentListItem>,
}

/// `{"comment": {...}}`
#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub comment: Comment,
}

/// `{"users": [...]}`
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub users: Vec<UserSummary>,
}

/// `{"user": {...}}`
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
}
