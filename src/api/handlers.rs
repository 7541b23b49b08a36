//! API request handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Html,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument};

use crate::user::{UserInfo, UserPayload};

use super::error::{ApiError, ApiResult};
use super::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Static greeting at the service root.
pub async fn home() -> Html<&'static str> {
    Html("<h1>Rosterd REST API</h1>")
}

/// List every user.
#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserInfo>>> {
    let users = state.users.list_users().await?;

    let infos: Vec<UserInfo> = users.into_iter().map(Into::into).collect();
    Ok(Json(infos))
}

/// Create a new user and return the full updated list.
#[instrument(skip(state, body))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<Vec<UserInfo>>)> {
    let payload = parse_user_payload(&body)?;

    let user = state.users.create_user(payload).await?;
    info!(user_id = user.user_id, "Created user");

    let users = state.users.list_users().await?;
    let infos: Vec<UserInfo> = users.into_iter().map(Into::into).collect();
    Ok((StatusCode::CREATED, Json(infos)))
}

/// Get a specific user.
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<UserInfo>> {
    state
        .users
        .get_user(user_id)
        .await?
        .map(|u| Json(u.into()))
        .ok_or_else(|| ApiError::not_found("User not found"))
}

/// Overwrite a user's mutable fields.
///
/// The body is validated before the existence check, so a malformed body
/// on an unknown id yields 400 rather than 404.
#[instrument(skip(state, body))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(body): Json<Value>,
) -> ApiResult<Json<UserInfo>> {
    let payload = parse_user_payload(&body)?;

    let user = state.users.update_user(user_id, payload).await?;
    info!(user_id = user.user_id, "Updated user");

    Ok(Json(user.into()))
}

/// List users with status = true.
#[instrument(skip(state))]
pub async fn list_active_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserInfo>>> {
    let users = state.users.list_users_by_status(true).await?;

    let infos: Vec<UserInfo> = users.into_iter().map(Into::into).collect();
    Ok(Json(infos))
}

/// List users with status = false.
#[instrument(skip(state))]
pub async fn list_inactive_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserInfo>>> {
    let users = state.users.list_users_by_status(false).await?;

    let infos: Vec<UserInfo> = users.into_iter().map(Into::into).collect();
    Ok(Json(infos))
}

/// Validate the request body shared by create and update.
///
/// All three fields are required; a missing or wrong-typed field yields a
/// 400 naming the offending field.
fn parse_user_payload(body: &Value) -> Result<UserPayload, ApiError> {
    let login = require_string(body, "user_login")?;
    let name = require_string(body, "user_name")?;
    let status = require_bool(body, "user_status")?;

    Ok(UserPayload {
        login,
        name,
        status,
    })
}

fn require_string(body: &Value, field: &'static str) -> Result<String, ApiError> {
    match body.get(field) {
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(ApiError::bad_request(format!("{field} must be a string"))),
        None => Err(ApiError::bad_request(format!("{field} cannot be blank"))),
    }
}

fn require_bool(body: &Value, field: &'static str) -> Result<bool, ApiError> {
    match body.get(field) {
        Some(Value::Bool(value)) => Ok(*value),
        Some(_) => Err(ApiError::bad_request(format!("{field} must be a boolean"))),
        None => Err(ApiError::bad_request(format!("{field} cannot be blank"))),
    }
}
