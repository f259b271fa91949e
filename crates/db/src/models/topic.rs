//! Topic model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `topics` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Topic {
    pub slug: String,
    pub description: String,
}

/// DTO for creating a new topic.
///
/// Fields are optional so missing values reach the database as SQL NULLs
/// and surface as not-null violations.
#[derive(Debug, Deserialize)]
pub struct CreateTopic {
    pub slug: Option<String>,
    pub description: Option<String>,
}
