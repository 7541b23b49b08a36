//! Application state shared across handlers.

use std::sync::Arc;

use crate::user::UserService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// User service for roster operations.
    pub users: Arc<UserService>,
}

impl AppState {
    /// Create new application state.
    pub fn new(users: UserService) -> Self {
        Self {
            users: Arc::new(users),
        }
    }
}
