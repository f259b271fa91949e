//! Comment models.

use newswire_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `comments` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Comment {
    pub comment_id: DbId,
    pub article_id: DbId,
    pub author: String,
    pub body: String,
    pub votes: i32,
    pub created_at: Timestamp,
}

/// Shape for comments listed under an article: the parent id is implied
/// by the request path and dropped from the payload.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CommentListItem {
    pub comment_id: DbId,
    pub votes: i32,
    pub created_at: Timestamp,
    pub author: String,
    pub body: String,
}

/// DTO for posting a comment (`{"username": ..., "body": ...}`).
///
/// Fields are optional so missing values reach the database as SQL NULLs
/// and surface as not-null violations.
#[derive(Debug, Deserialize)]
pub struct CreateComment {
    pub username: Option<String>,
    pub body: Option<String>,
}

impl CreateComment {
    /// True when the submitted body carried no fields at all.
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.body.is_none()
    }
}

/// DTO for patching a comment's votes (`{"inc_votes": n}`).
#[derive(Debug, Deserialize)]
pub struct UpdateCommentVotes {
    pub inc_votes: Option<i32>,
}
