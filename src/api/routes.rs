//! API route definitions.

use axum::{Router, routing::get};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use super::handlers;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    // Tracing layer with request spans and timing
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health))
        .route(
            "/api/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        // Static segments take precedence over the id capture
        .route("/api/users/active", get(handlers::list_active_users))
        .route("/api/users/inactive", get(handlers::list_inactive_users))
        .route(
            "/api/users/{user_id}",
            get(handlers::get_user).patch(handlers::update_user),
        )
        .with_state(state)
        .layer(trace_layer)
}
