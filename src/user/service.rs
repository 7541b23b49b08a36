//! User service for business logic.

use anyhow::{Result, bail};
use tracing::{info, instrument};

use super::models::{User, UserPayload};
use super::repository::UserRepository;

/// Service for user roster operations.
#[derive(Debug, Clone)]
pub struct UserService {
    repo: UserRepository,
}

impl UserService {
    /// Create a new user service.
    pub fn new(repo: UserRepository) -> Self {
        Self { repo }
    }

    /// Create a new user with validation.
    ///
    /// `payload.status` is accepted in the request schema but discarded:
    /// new rows always start active.
    #[instrument(skip(self, payload), fields(login = %payload.login))]
    pub async fn create_user(&self, payload: UserPayload) -> Result<User> {
        check_text_field("user_login", &payload.login)?;
        check_text_field("user_name", &payload.name)?;

        let user = self.repo.create(&payload.login, &payload.name).await?;
        info!(user_id = user.user_id, login = %user.user_login, "Created new user");

        Ok(user)
    }

    /// Get a user by id.
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: i64) -> Result<Option<User>> {
        self.repo.get(id).await
    }

    /// List every user.
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.repo.list().await
    }

    /// List users with the given status.
    #[instrument(skip(self))]
    pub async fn list_users_by_status(&self, status: bool) -> Result<Vec<User>> {
        self.repo.list_by_status(status).await
    }

    /// Overwrite a user's mutable fields.
    #[instrument(skip(self, payload))]
    pub async fn update_user(&self, id: i64, payload: UserPayload) -> Result<User> {
        check_text_field("user_login", &payload.login)?;
        check_text_field("user_name", &payload.name)?;

        if self.repo.get(id).await?.is_none() {
            bail!("User not found");
        }

        let user = self
            .repo
            .update(id, &payload.login, &payload.name, payload.status)
            .await?;
        info!(user_id = user.user_id, "Updated user");

        Ok(user)
    }
}

/// Validate a required text field: non-blank and at most 256 characters.
fn check_text_field(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        bail!("{field} cannot be blank");
    }
    if value.chars().count() > 256 {
        bail!("{field} must be at most 256 characters");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_text_field() {
        assert!(check_text_field("user_login", "alice").is_ok());
        assert!(check_text_field("user_login", &"a".repeat(256)).is_ok());

        let blank = check_text_field("user_login", "").unwrap_err();
        assert_eq!(blank.to_string(), "user_login cannot be blank");

        let long = check_text_field("user_name", &"a".repeat(257)).unwrap_err();
        assert_eq!(long.to_string(), "user_name must be at most 256 characters");
    }

    async fn test_service() -> UserService {
        let pool = sqlx::SqlitePool::connect(":memory:").await.unwrap();
        sqlx::query(
            r#"
            CREATE TABLE users (
                user_id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_login TEXT NOT NULL UNIQUE,
                user_name TEXT NOT NULL UNIQUE,
                user_status BOOLEAN NOT NULL DEFAULT TRUE,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .unwrap();

        UserService::new(UserRepository::new(pool))
    }

    #[tokio::test]
    async fn test_create_discards_submitted_status() {
        let service = test_service().await;

        let user = service
            .create_user(UserPayload {
                login: "alice".to_string(),
                name: "Alice A".to_string(),
                status: false,
            })
            .await
            .unwrap();

        assert!(user.user_status);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let service = test_service().await;

        let err = service
            .update_user(
                999,
                UserPayload {
                    login: "ghost".to_string(),
                    name: "Ghost G".to_string(),
                    status: true,
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "User not found");
    }

    #[tokio::test]
    async fn test_update_applies_all_three_fields() {
        let service = test_service().await;

        let user = service
            .create_user(UserPayload {
                login: "bob".to_string(),
                name: "Bob B".to_string(),
                status: true,
            })
            .await
            .unwrap();

        let updated = service
            .update_user(
                user.user_id,
                UserPayload {
                    login: "bob2".to_string(),
                    name: "Bob B2".to_string(),
                    status: false,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.user_login, "bob2");
        assert_eq!(updated.user_name, "Bob B2");
        assert!(!updated.user_status);
        assert!(updated.updated_at >= updated.created_at);
    }
}
