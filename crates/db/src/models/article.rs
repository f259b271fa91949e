//! Article models.
//!
//! Three row shapes exist: the bare table row (returned by vote patches),
//! the single-article shape with the comment aggregate, and the list-item
//! shape which drops `body`.

use newswire_core::listing::{SortColumn, SortOrder};
use newswire_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `articles` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Article {
    pub article_id: DbId,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: Timestamp,
    pub votes: i32,
}

/// The full row plus the read-time comment aggregate.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ArticleDetail {
    pub article_id: DbId,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: Timestamp,
    pub votes: i32,
    pub comment_count: i64,
}

/// Summary shape for the articles collection: no `body`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ArticleListItem {
    pub article_id: DbId,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub created_at: Timestamp,
    pub votes: i32,
    pub comment_count: i64,
}

/// DTO for creating a new article.
///
/// Fields are optional so missing values reach the database as SQL NULLs
/// and surface as not-null violations.
#[derive(Debug, Deserialize)]
pub struct CreateArticle {
    pub author: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub topic: Option<String>,
}

/// DTO for patching an article's votes (`{"inc_votes": n}`).
#[derive(Debug, Deserialize)]
pub struct UpdateArticleVotes {
    pub inc_votes: Option<i32>,
}

/// Validated listing parameters for the articles collection.
#[derive(Debug, Clone)]
pub struct ArticleFilter {
    pub topic: Option<String>,
    pub sort: SortColumn,
    pub order: SortOrder,
    /// 0 means no LIMIT clause.
    pub limit: i64,
    pub offset: i64,
}
