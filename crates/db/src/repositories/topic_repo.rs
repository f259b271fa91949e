//! Repository for the `topics` table.

use sqlx::PgPool;

use crate::models::topic::{CreateTopic, Topic};

/// Column list for topics queries.
const COLUMNS: &str = "slug, description";

/// Provides read and insert operations for topics.
pub struct TopicRepo;

impl TopicRepo {
    /// List all topics, ordered by slug ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Topic>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM topics ORDER BY slug ASC");
        sqlx::query_as::<_, Topic>(&query).fetch_all(pool).await
    }

    /// Check whether a topic with the given slug exists.
    pub async fn exists(pool: &PgPool, slug: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM topics WHERE slug = $1)")
            .bind(slug)
            .fetch_one(pool)
            .await
    }

    /// Insert a new topic, returning the created row.
    ///
    /// A missing slug surfaces as a not-null violation and a duplicate
    /// slug as a unique violation; both are classified by the HTTP layer.
    pub async fn create(pool: &PgPool, input: &CreateTopic) -> Result<Topic, sqlx::Error> {
        let query =
            format!("INSERT INTO topics (slug, description) VALUES ($1, $2) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Topic>(&query)
            .bind(&input.slug)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }
}
