//! User entity and wire representations.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A user row as stored in the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub user_id: i64,
    pub user_login: String,
    pub user_name: String,
    pub user_status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated request body shared by the create and update operations.
///
/// All three fields are required in the request schema. Create discards
/// `status` (new rows always start active); update applies all three.
#[derive(Debug, Clone)]
pub struct UserPayload {
    pub login: String,
    pub name: String,
    pub status: bool,
}

/// Wire representation of a user row.
///
/// Exactly these six fields, in this order; timestamps render as ISO-8601.
#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    pub user_id: i64,
    pub user_login: String,
    pub user_name: String,
    pub user_status: bool,
    #[serde(rename = "user_createdAt")]
    pub user_created_at: DateTime<Utc>,
    #[serde(rename = "user_updatedAt")]
    pub user_updated_at: DateTime<Utc>,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            user_login: user.user_login,
            user_name: user.user_name,
            user_status: user.user_status,
            user_created_at: user.created_at,
            user_updated_at: user.updated_at,
        }
    }
}
