use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    /// Release year
    pub release_date: i32,
}

/// Create/update payload, same presence rules as actors.
#[derive(Debug, Deserialize)]
pub struct MoviePayload {
    pub title: Option<String>,
    pub release_date: Option<i32>,
}
