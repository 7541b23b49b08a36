//! User Roster Service Library
//!
//! This library provides the core components for the rosterd user CRUD service.

pub mod api;
pub mod db;
pub mod user;
