use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Actor {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub gender: String,
}

/// Create/update payload. Fields stay optional so handlers can apply the
/// presence rules themselves: 422 on create, 400 on update.
#[derive(Debug, Deserialize)]
pub struct ActorPayload {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
}
