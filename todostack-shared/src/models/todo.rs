/// Todo entity and representation
///
/// A todo is a trackable task record, optionally linked to a category and
/// owned by a user. The store assigns ids; callers submit a [`TodoDraft`]
/// (id absent for create, present for update) and get back a full [`Todo`]
/// row.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE todos (
///     id BIGSERIAL PRIMARY KEY,
///     user_id BIGINT REFERENCES users(id) ON DELETE SET NULL,
///     category_id BIGINT,
///     title VARCHAR(255) NOT NULL,
///     description TEXT,
///     completed BOOLEAN NOT NULL DEFAULT FALSE,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use crate::models::category::CategoryDto;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Todo entity as persisted by the store
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    /// Store-assigned id
    pub id: i64,

    /// Owning user (nullable if the user was deleted)
    pub user_id: Option<i64>,

    /// Owning category, if any
    pub category_id: Option<i64>,

    /// Short task title
    pub title: String,

    /// Optional longer description
    pub description: Option<String>,

    /// Completion flag
    pub completed: bool,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for persisting a todo
///
/// `id: None` asks the store to assign one; `id: Some(_)` upserts that row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoDraft {
    /// Row to upsert, or None to create
    pub id: Option<i64>,

    /// Owning user
    pub user_id: Option<i64>,

    /// Owning category
    pub category_id: Option<i64>,

    /// Task title
    pub title: String,

    /// Optional description
    pub description: Option<String>,

    /// Completion flag
    pub completed: bool,
}

/// Representation of a todo exchanged with the API layer
///
/// The `category` sub-object is only populated on single-item retrieval,
/// and may be partial (id only) when the association is known but the
/// category record was not fetched.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TodoDto {
    /// Store-assigned id (absent on create requests)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Task title, non-empty and bounded
    #[validate(length(min = 1, max = 255, message = "title must be between 1 and 255 characters"))]
    pub title: String,

    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Completion flag
    #[serde(default)]
    pub completed: bool,

    /// Owning user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    /// Owning category, possibly partial
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryDto>,
}

impl TodoDto {
    /// Converts a persisted row into its representation
    ///
    /// The category sub-object is left unset; single-item retrieval attaches
    /// it separately from the dedicated association lookup.
    pub fn from_entity(todo: &Todo) -> Self {
        Self {
            id: Some(todo.id),
            title: todo.title.clone(),
            description: todo.description.clone(),
            completed: todo.completed,
            user_id: todo.user_id,
            category: None,
        }
    }

    /// Converts the representation into the shape the store persists
    pub fn into_draft(self) -> TodoDraft {
        let category_id = self.category.as_ref().and_then(|c| c.id);
        TodoDraft {
            id: self.id,
            user_id: self.user_id,
            category_id,
            title: self.title,
            description: self.description,
            completed: self.completed,
        }
    }
}
