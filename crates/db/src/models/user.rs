//! User models.

use serde::Serialize;
use sqlx::FromRow;

/// A row from the `users` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: Option<String>,
}

/// Listing shape for the users collection: usernames only.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserSummary {
    pub username: String,
}
