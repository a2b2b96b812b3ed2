/// User endpoints
///
/// # Endpoints
///
/// - `POST   /v1/users` - Create or update a user
/// - `GET    /v1/users` - List all users
/// - `GET    /v1/users/:id` - Fetch one user
/// - `DELETE /v1/users/:id` - Delete a user
/// - `POST   /v1/auth/login` - Credential login

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    services::ErrorCode,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use todostack_shared::models::user::UserDto;

/// Login request
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email address
    pub email: String,

    /// Plaintext password
    pub password: String,
}

/// Create or update a user
///
/// The password is hashed server-side and never echoed back.
///
/// # Errors
///
/// - `422 Unprocessable Entity`: Validation failed
pub async fn create_user(
    State(state): State<AppState>,
    Json(dto): Json<UserDto>,
) -> ApiResult<Json<UserDto>> {
    let saved = state.users.save(dto).await?;
    Ok(Json(saved))
}

/// List all users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserDto>>> {
    let users = state.users.find_all().await?;
    Ok(Json(users))
}

/// Fetch one user by id
///
/// # Errors
///
/// - `404 Not Found`: No user exists for the id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<UserDto>> {
    let user = state
        .users
        .find_by_id(Some(id))
        .await?
        .ok_or_else(|| ApiError::NotFound {
            code: ErrorCode::UserNotFound,
            message: format!("No user found with id = {}", id),
        })?;

    Ok(Json(user))
}

/// Delete a user by id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.users.delete(Some(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Authenticate with email and password
///
/// # Errors
///
/// - `401 Unauthorized`: Wrong password
/// - `404 Not Found`: Unknown email
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<UserDto>> {
    let user = state.users.login(&req.email, &req.password).await?;
    Ok(Json(user))
}
