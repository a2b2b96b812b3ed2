/// Todo service
///
/// Validates, persists, retrieves, and deletes todo records, enriching
/// single-item retrieval with the owning-category association.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use todostack_api::services::TodoService;
/// use todostack_shared::models::todo::TodoDto;
/// use todostack_shared::store::memory::MemoryStore;
///
/// # async fn example() -> Result<(), todostack_api::services::ServiceError> {
/// let store = Arc::new(MemoryStore::new());
/// let todos = TodoService::new(store.clone(), store);
///
/// let saved = todos
///     .save(TodoDto {
///         id: None,
///         title: "Water the plants".to_string(),
///         description: None,
///         completed: false,
///         user_id: None,
///         category: None,
///     })
///     .await?;
///
/// assert!(saved.id.is_some());
/// # Ok(())
/// # }
/// ```

use crate::services::{ErrorCode, ServiceError, ServiceResult};
use std::sync::Arc;
use todostack_shared::models::category::CategoryDto;
use todostack_shared::models::todo::TodoDto;
use todostack_shared::store::{CategoryStore, TodoStore};
use todostack_shared::validators::validate_todo;

/// Service for todo records
///
/// Cheap to clone; the store handles live behind `Arc`.
#[derive(Clone)]
pub struct TodoService {
    todos: Arc<dyn TodoStore>,
    categories: Arc<dyn CategoryStore>,
}

impl TodoService {
    /// Creates a service over the given store collaborators
    pub fn new(todos: Arc<dyn TodoStore>, categories: Arc<dyn CategoryStore>) -> Self {
        Self { todos, categories }
    }

    /// Validates and persists a todo, returning the stored representation
    ///
    /// Runs the validation rule set before any store interaction; every
    /// violation is reported at once. On success the returned
    /// representation reflects store-assigned fields such as a fresh id.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidEntity` when validation rejects the input.
    pub async fn save(&self, dto: TodoDto) -> ServiceResult<TodoDto> {
        let violations = validate_todo(&dto);
        if !violations.is_empty() {
            tracing::error!(title = %dto.title, ?violations, "todo failed validation");
            return Err(ServiceError::InvalidEntity {
                code: ErrorCode::TodoNotValid,
                message: "Todo is not valid".to_string(),
                violations,
            });
        }

        let saved = self.todos.save(dto.into_draft()).await?;
        Ok(TodoDto::from_entity(&saved))
    }

    /// Returns every todo in store order
    pub async fn find_all(&self) -> ServiceResult<Vec<TodoDto>> {
        let todos = self.todos.find_all().await?;
        Ok(todos.iter().map(TodoDto::from_entity).collect())
    }

    /// Retrieves one todo, enriched with its owning-category association
    ///
    /// An absent id is tolerated: the call logs a diagnostic and returns
    /// `Ok(None)` instead of failing. A present id that matches no record
    /// fails with `EntityNotFound`. The category sub-object of the result
    /// carries only the id yielded by the association lookup; the category
    /// record itself is never fetched.
    pub async fn find_by_id(&self, id: Option<i64>) -> ServiceResult<Option<TodoDto>> {
        let Some(id) = id else {
            tracing::warn!("todo lookup requested without an id");
            return Ok(None);
        };

        // The association is resolved through its own query, not read off
        // the fetched row.
        let category_id = self.categories.find_category_id_by_todo_id(id).await?;

        let todo = self
            .todos
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::EntityNotFound {
                code: ErrorCode::TodoNotFound,
                message: format!("No todo found with id = {}", id),
            })?;

        let mut dto = TodoDto::from_entity(&todo);
        dto.category = category_id.map(CategoryDto::partial);
        Ok(Some(dto))
    }

    /// Returns all todos associated with a category
    ///
    /// The category's existence is not checked; an unknown or empty
    /// category yields an empty result.
    pub async fn find_by_category(&self, category_id: i64) -> ServiceResult<Vec<TodoDto>> {
        let todos = self.todos.find_by_category_id(category_id).await?;
        Ok(todos.iter().map(TodoDto::from_entity).collect())
    }

    /// Deletes a todo by id
    ///
    /// An absent id logs a diagnostic and returns without touching the
    /// store. A present id is deleted unconditionally; the store's delete
    /// is idempotent, so an unknown id completes without failure.
    pub async fn delete(&self, id: Option<i64>) -> ServiceResult<()> {
        let Some(id) = id else {
            tracing::warn!("todo delete requested without an id");
            return Ok(());
        };

        self.todos.delete_by_id(id).await?;
        Ok(())
    }
}
