//! Test utilities and common setup.

use axum::Router;
use rosterd::api::{self, AppState};
use rosterd::db::Database;
use rosterd::user::{UserRepository, UserService};

/// Create a test application backed by an in-memory database.
pub async fn test_app() -> Router {
    let db = Database::in_memory().await.unwrap();

    let user_repo = UserRepository::new(db.pool().clone());
    let user_service = UserService::new(user_repo);

    let state = AppState::new(user_service);
    api::create_router(state)
}
