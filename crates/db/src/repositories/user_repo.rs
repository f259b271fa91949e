//! Repository for the `users` table.

use sqlx::PgPool;

use crate::models::user::{User, UserSummary};

/// Provides read operations for users.
pub struct UserRepo;

impl UserRepo {
    /// List all usernames, ordered ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<UserSummary>, sqlx::Error> {
        sqlx::query_as::<_, UserSummary>("SELECT username FROM users ORDER BY username ASC")
            .fetch_all(pool)
            .await
    }

    /// Find a user by username.
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "SELECT username, name, avatar_url FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(pool)
        .await
    }
}
