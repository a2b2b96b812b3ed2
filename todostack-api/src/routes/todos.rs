/// Todo endpoints
///
/// # Endpoints
///
/// - `POST   /v1/todos` - Create or update a todo (upsert by body id)
/// - `GET    /v1/todos` - List all todos
/// - `GET    /v1/todos/:id` - Fetch one todo with its category attached
/// - `DELETE /v1/todos/:id` - Delete a todo
/// - `GET    /v1/categories/:id/todos` - List todos for a category

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
use todostack_shared::models::todo::TodoDto;

/// Create or update a todo
///
/// The body is validated before anything is persisted; violations come
/// back as a 422 with the full list.
///
/// # Endpoint
///
/// ```text
/// POST /v1/todos
/// Content-Type: application/json
///
/// {
///   "title": "Water the plants",
///   "description": "Back porch first",
///   "category": { "id": 3 }
/// }
/// ```
///
/// # Errors
///
/// - `422 Unprocessable Entity`: Validation failed
pub async fn create_todo(
    State(state): State<AppState>,
    Json(dto): Json<TodoDto>,
) -> ApiResult<Json<TodoDto>> {
    let saved = state.todos.save(dto).await?;
    Ok(Json(saved))
}

/// List all todos
pub async fn list_todos(State(state): State<AppState>) -> ApiResult<Json<Vec<TodoDto>>> {
    let todos = state.todos.find_all().await?;
    Ok(Json(todos))
}

/// Fetch one todo by id
///
/// The response carries the owning-category association as a partial
/// category object (id only).
///
/// # Errors
///
/// - `404 Not Found`: No todo exists for the id
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<TodoDto>> {
    let todo = state
        .todos
        .find_by_id(Some(id))
        .await?
        .ok_or_else(|| ApiError::NotFound {
            code: ErrorCode::TodoNotFound,
            message: format!("No todo found with id = {}", id),
        })?;

    Ok(Json(todo))
}

/// List todos associated with a category
///
/// An unknown category is not an error; it simply has no todos.
pub async fn list_todos_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
) -> ApiResult<Json<Vec<TodoDto>>> {
    let todos = state.todos.find_by_category(category_id).await?;
    Ok(Json(todos))
}

/// Delete a todo by id
///
/// Deletion is idempotent; an unknown id still yields 204.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.todos.delete(Some(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
