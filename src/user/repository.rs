//! User repository for database operations.

use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, instrument};

use super::models::User;

/// Repository for user database operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new user row.
    ///
    /// New rows always start active; both timestamps are set to the same
    /// instant so `updated_at == created_at` at creation.
    #[instrument(skip(self))]
    pub async fn create(&self, login: &str, name: &str) -> Result<User> {
        let now = Utc::now();

        debug!("Creating user: {}", login);

        let result = sqlx::query(
            r#"
            INSERT INTO users (user_login, user_name, user_status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(login)
        .bind(name)
        .bind(true)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .context("Failed to insert user")?;

        let id = result.last_insert_rowid();
        self.get(id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("User not found after creation"))
    }

    /// Get a user by id.
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, user_login, user_name, user_status, created_at, updated_at
            FROM users
            WHERE user_id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch user")?;

        Ok(user)
    }

    /// List every user row in store-default (insertion) order.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, user_login, user_name, user_status, created_at, updated_at
            FROM users
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list users")?;

        Ok(users)
    }

    /// List users filtered by status.
    #[instrument(skip(self))]
    pub async fn list_by_status(&self, status: bool) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, user_login, user_name, user_status, created_at, updated_at
            FROM users
            WHERE user_status = ?
            "#,
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list users by status")?;

        Ok(users)
    }

    /// Overwrite the three mutable fields and refresh the updated timestamp.
    #[instrument(skip(self))]
    pub async fn update(&self, id: i64, login: &str, name: &str, status: bool) -> Result<User> {
        let now = Utc::now();

        sqlx::query(
            r#"
            UPDATE users
            SET user_login = ?, user_name = ?, user_status = ?, updated_at = ?
            WHERE user_id = ?
            "#,
        )
        .bind(login)
        .bind(name)
        .bind(status)
        .bind(now)
        .bind(id)
        .execute(&self.pool)
        .await
        .context("Failed to update user")?;

        self.get(id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("User not found after update"))
    }

    /// Count total users.
    #[instrument(skip(self))]
    pub async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count users")?;

        Ok(count.0)
    }
}
