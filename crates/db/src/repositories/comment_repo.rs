//! Repository for the `comments` table.

use sqlx::PgPool;

use newswire_core::types::DbId;

use crate::models::comment::{Comment, CommentListItem, CreateComment};

/// Column list for full `comments` rows.
const COLUMNS: &str = "comment_id, article_id, author, body, votes, created_at";

/// Provides CRUD operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// List the comments on an article, newest first.
    pub async fn list_by_article(
        pool: &PgPool,
        article_id: DbId,
    ) -> Result<Vec<CommentListItem>, sqlx::Error> {
        sqlx::query_as::<_, CommentListItem>(
            "SELECT comment_id, votes, created_at, author, body \
             FROM comments \
             WHERE article_id = $1 \
             ORDER BY created_at DESC",
        )
        .bind(article_id)
        .fetch_all(pool)
        .await
    }

    /// Insert a comment on an article, returning the created row.
    ///
    /// An unknown author surfaces as a foreign-key violation; the caller
    /// is expected to have checked the article exists.
    pub async fn create(
        pool: &PgPool,
        article_id: DbId,
        input: &CreateComment,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (article_id, author, body) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(article_id)
            .bind(&input.username)
            .bind(&input.body)
            .fetch_one(pool)
            .await
    }

    /// Apply a vote delta, returning the updated row.
    pub async fn update_votes(
        pool: &PgPool,
        id: DbId,
        delta: i32,
    ) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!(
            "UPDATE comments SET votes = votes + $2 WHERE comment_id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .bind(delta)
            .fetch_optional(pool)
            .await
    }

    /// Delete a comment by id. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
