//! Repository for the `articles` table.

use sqlx::PgPool;

use newswire_core::listing::{SortColumn, SortOrder};
use newswire_core::types::DbId;

use crate::models::article::{
    Article, ArticleDetail, ArticleFilter, ArticleListItem, CreateArticle,
};

/// Column list for bare `articles` rows.
const COLUMNS: &str = "article_id, title, topic, author, body, created_at, votes";

/// Provides CRUD operations for articles, including the read-time
/// comment aggregate.
pub struct ArticleRepo;

impl ArticleRepo {
    /// Fetch one article with its comment count.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ArticleDetail>, sqlx::Error> {
        sqlx::query_as::<_, ArticleDetail>(
            "SELECT articles.article_id, articles.title, articles.topic, articles.author, \
             articles.body, articles.created_at, articles.votes, \
             COUNT(comments.comment_id) AS comment_count \
             FROM articles \
             LEFT JOIN comments ON comments.article_id = articles.article_id \
             WHERE articles.article_id = $1 \
             GROUP BY articles.article_id",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Check whether an article with the given id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM articles WHERE article_id = $1)",
        )
        .bind(id)
        .fetch_one(pool)
        .await
    }

    /// List one page of article summaries.
    ///
    /// The ORDER BY clause is built from the validated [`SortColumn`] /
    /// [`SortOrder`] enums, never from raw input. A limit of 0 omits the
    /// LIMIT clause entirely.
    pub async fn list(
        pool: &PgPool,
        filter: &ArticleFilter,
    ) -> Result<Vec<ArticleListItem>, sqlx::Error> {
        let mut query = String::from(
            "SELECT articles.article_id, articles.title, articles.topic, articles.author, \
             articles.created_at, articles.votes, \
             COUNT(comments.comment_id) AS comment_count \
             FROM articles \
             LEFT JOIN comments ON comments.article_id = articles.article_id",
        );

        if filter.topic.is_some() {
            query.push_str(" WHERE articles.topic = $1");
        }

        query.push_str(" GROUP BY articles.article_id");
        query.push_str(&format!(
            " ORDER BY {} {}",
            sort_sql(filter.sort),
            order_sql(filter.order)
        ));

        if filter.limit > 0 {
            let (limit_param, offset_param) = if filter.topic.is_some() {
                ("$2", "$3")
            } else {
                ("$1", "$2")
            };
            query.push_str(&format!(" LIMIT {limit_param} OFFSET {offset_param}"));
        }

        let mut q = sqlx::query_as::<_, ArticleListItem>(&query);
        if let Some(topic) = &filter.topic {
            q = q.bind(topic);
        }
        if filter.limit > 0 {
            q = q.bind(filter.limit).bind(filter.offset);
        }

        q.fetch_all(pool).await
    }

    /// Count all articles matching the topic filter, ignoring pagination.
    pub async fn count(pool: &PgPool, topic: Option<&str>) -> Result<i64, sqlx::Error> {
        match topic {
            Some(topic) => {
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM articles WHERE topic = $1")
                    .bind(topic)
                    .fetch_one(pool)
                    .await
            }
            None => {
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM articles")
                    .fetch_one(pool)
                    .await
            }
        }
    }

    /// Insert a new article, returning its id.
    ///
    /// Missing fields surface as not-null violations and unknown
    /// author/topic values as foreign-key violations.
    pub async fn create(pool: &PgPool, input: &CreateArticle) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO articles (author, title, body, topic) \
             VALUES ($1, $2, $3, $4) \
             RETURNING article_id",
        )
        .bind(&input.author)
        .bind(&input.title)
        .bind(&input.body)
        .bind(&input.topic)
        .fetch_one(pool)
        .await
    }

    /// Apply a vote delta, returning the updated row.
    pub async fn update_votes(
        pool: &PgPool,
        id: DbId,
        delta: i32,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query = format!(
            "UPDATE articles SET votes = votes + $2 WHERE article_id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .bind(delta)
            .fetch_optional(pool)
            .await
    }

    /// Delete an article by id; its comments cascade at the schema level.
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM articles WHERE article_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn sort_sql(sort: SortColumn) -> &'static str {
    match sort {
        SortColumn::Title => "articles.title",
        SortColumn::Topic => "articles.topic",
        SortColumn::Author => "articles.author",
        SortColumn::CreatedAt => "articles.created_at",
        SortColumn::Votes => "articles.votes",
        SortColumn::CommentCount => "comment_count",
    }
}

fn order_sql(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Asc => "ASC",
        SortOrder::Desc => "DESC",
    }
}
