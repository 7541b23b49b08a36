//! User management module.
//!
//! Provides the user entity, repository, and service for the roster CRUD
//! operations.

mod models;
mod repository;
mod service;

pub use models::{User, UserInfo, UserPayload};
pub use repository::UserRepository;
pub use service::UserService;
