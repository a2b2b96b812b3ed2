/// Storage collaborators
///
/// This module defines the persistence seams the service layer depends on.
/// Services receive store instances explicitly at construction time as
/// `Arc<dyn …>`, so the same logic runs over Postgres in production and the
/// in-memory store in tests.
///
/// # Contracts
///
/// - `save` is an upsert: a draft without an id creates a row and the store
///   assigns the id; a draft with an id writes that row, creating it if
///   missing.
/// - `find_all` and the by-category listing return rows in stable id order
///   and an empty vector when nothing matches.
/// - `delete_by_id` is idempotent; deleting an unknown id reports `false`
///   and is not an error.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use todostack_shared::models::todo::TodoDraft;
/// use todostack_shared::store::{memory::MemoryStore, TodoStore};
///
/// # async fn example() -> Result<(), todostack_shared::store::StoreError> {
/// let store: Arc<dyn TodoStore> = Arc::new(MemoryStore::new());
///
/// let todo = store
///     .save(TodoDraft {
///         id: None,
///         user_id: None,
///         category_id: None,
///         title: "Water the plants".to_string(),
///         description: None,
///         completed: false,
///     })
///     .await?;
///
/// assert!(store.find_by_id(todo.id).await?.is_some());
/// # Ok(())
/// # }
/// ```

pub mod memory;
pub mod postgres;

use crate::models::todo::{Todo, TodoDraft};
use crate::models::user::{User, UserDraft};
use async_trait::async_trait;

/// Error raised by a storage backend
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Underlying database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Store result type alias
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence for todo records
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Upserts a todo and returns the persisted row
    async fn save(&self, draft: TodoDraft) -> StoreResult<Todo>;

    /// Returns every todo in stable id order
    async fn find_all(&self) -> StoreResult<Vec<Todo>>;

    /// Finds a todo by id
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Todo>>;

    /// Returns all todos associated with a category
    async fn find_by_category_id(&self, category_id: i64) -> StoreResult<Vec<Todo>>;

    /// Deletes a todo by id; deleting an unknown id is a no-op
    async fn delete_by_id(&self, id: i64) -> StoreResult<bool>;
}

/// Association lookups for categories
///
/// The owning-category id of a todo is resolved through this dedicated
/// query rather than read off a fetched todo value.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// Returns the id of the category a todo belongs to, if any
    async fn find_category_id_by_todo_id(&self, todo_id: i64) -> StoreResult<Option<i64>>;
}

/// Persistence for user accounts
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Upserts a user and returns the persisted row
    async fn save(&self, draft: UserDraft) -> StoreResult<User>;

    /// Returns every user in stable id order
    async fn find_all(&self) -> StoreResult<Vec<User>>;

    /// Finds a user by id
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<User>>;

    /// Finds a user by email address
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// Deletes a user by id; deleting an unknown id is a no-op
    async fn delete_by_id(&self, id: i64) -> StoreResult<bool>;
}
