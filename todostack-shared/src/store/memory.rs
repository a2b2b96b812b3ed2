/// In-memory store for testing and demos
///
/// This store keeps everything in mutexed maps and assigns ids
/// monotonically, so the service layer and the HTTP surface can be
/// exercised without a database. One value implements every store trait;
/// hand clones of the same `Arc` to each collaborator slot so the category
/// association lookups observe the todos written through [`TodoStore`].
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use todostack_shared::models::todo::TodoDraft;
/// use todostack_shared::store::{memory::MemoryStore, CategoryStore, TodoStore};
///
/// # async fn example() -> Result<(), todostack_shared::store::StoreError> {
/// let store = Arc::new(MemoryStore::new());
///
/// let todo = store
///     .save(TodoDraft {
///         id: None,
///         user_id: None,
///         category_id: Some(9),
///         title: "Rake leaves".to_string(),
///         description: None,
///         completed: false,
///     })
///     .await?;
///
/// assert_eq!(store.find_category_id_by_todo_id(todo.id).await?, Some(9));
/// # Ok(())
/// # }
/// ```

use crate::models::todo::{Todo, TodoDraft};
use crate::models::user::{User, UserDraft};
use crate::store::{CategoryStore, StoreResult, TodoStore, UserStore};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct Inner {
    next_todo_id: i64,
    next_user_id: i64,
    todos: BTreeMap<i64, Todo>,
    users: BTreeMap<i64, User>,
}

/// In-memory implementation of every store trait
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn save(&self, draft: TodoDraft) -> StoreResult<Todo> {
        let mut inner = self.inner.lock().await;
        let now = Utc::now();

        let id = match draft.id {
            Some(id) => {
                // Keep future assignments clear of explicitly chosen ids
                inner.next_todo_id = inner.next_todo_id.max(id);
                id
            }
            None => {
                inner.next_todo_id += 1;
                inner.next_todo_id
            }
        };

        let created_at = inner
            .todos
            .get(&id)
            .map(|existing| existing.created_at)
            .unwrap_or(now);

        let todo = Todo {
            id,
            user_id: draft.user_id,
            category_id: draft.category_id,
            title: draft.title,
            description: draft.description,
            completed: draft.completed,
            created_at,
            updated_at: now,
        };

        inner.todos.insert(id, todo.clone());
        Ok(todo)
    }

    async fn find_all(&self) -> StoreResult<Vec<Todo>> {
        let inner = self.inner.lock().await;
        Ok(inner.todos.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Todo>> {
        let inner = self.inner.lock().await;
        Ok(inner.todos.get(&id).cloned())
    }

    async fn find_by_category_id(&self, category_id: i64) -> StoreResult<Vec<Todo>> {
        let inner = self.inner.lock().await;
        Ok(inner
            .todos
            .values()
            .filter(|t| t.category_id == Some(category_id))
            .cloned()
            .collect())
    }

    async fn delete_by_id(&self, id: i64) -> StoreResult<bool> {
        let mut inner = self.inner.lock().await;
        Ok(inner.todos.remove(&id).is_some())
    }
}

#[async_trait]
impl CategoryStore for MemoryStore {
    async fn find_category_id_by_todo_id(&self, todo_id: i64) -> StoreResult<Option<i64>> {
        let inner = self.inner.lock().await;
        Ok(inner.todos.get(&todo_id).and_then(|t| t.category_id))
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn save(&self, draft: UserDraft) -> StoreResult<User> {
        let mut inner = self.inner.lock().await;
        let now = Utc::now();

        let id = match draft.id {
            Some(id) => {
                inner.next_user_id = inner.next_user_id.max(id);
                id
            }
            None => {
                inner.next_user_id += 1;
                inner.next_user_id
            }
        };

        let created_at = inner
            .users
            .get(&id)
            .map(|existing| existing.created_at)
            .unwrap_or(now);

        let user = User {
            id,
            email: draft.email,
            password_hash: draft.password_hash,
            name: draft.name,
            created_at,
            updated_at: now,
        };

        inner.users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_all(&self) -> StoreResult<Vec<User>> {
        let inner = self.inner.lock().await;
        Ok(inner.users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<User>> {
        let inner = self.inner.lock().await;
        Ok(inner.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let inner = self.inner.lock().await;
        Ok(inner.users.values().find(|u| u.email == email).cloned())
    }

    async fn delete_by_id(&self, id: i64) -> StoreResult<bool> {
        let mut inner = self.inner.lock().await;
        Ok(inner.users.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, category_id: Option<i64>) -> TodoDraft {
        TodoDraft {
            id: None,
            user_id: None,
            category_id,
            title: title.to_string(),
            description: None,
            completed: false,
        }
    }

    #[tokio::test]
    async fn test_save_assigns_monotonic_ids() {
        let store = MemoryStore::new();

        let a = TodoStore::save(&store, draft("first", None)).await.unwrap();
        let b = TodoStore::save(&store, draft("second", None)).await.unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn test_save_with_id_upserts() {
        let store = MemoryStore::new();

        let created = TodoStore::save(&store, draft("before", None)).await.unwrap();

        let mut update = draft("after", Some(5));
        update.id = Some(created.id);
        let updated = TodoStore::save(&store, update).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "after");
        assert_eq!(updated.created_at, created.created_at);

        let all = TodoStore::find_all(&store).await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_find_by_category_filters() {
        let store = MemoryStore::new();

        TodoStore::save(&store, draft("in", Some(3))).await.unwrap();
        TodoStore::save(&store, draft("out", Some(4))).await.unwrap();
        TodoStore::save(&store, draft("none", None)).await.unwrap();

        let matching = store.find_by_category_id(3).await.unwrap();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].title, "in");

        assert!(store.find_by_category_id(99).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = MemoryStore::new();

        let todo = TodoStore::save(&store, draft("gone soon", None)).await.unwrap();

        assert!(TodoStore::delete_by_id(&store, todo.id).await.unwrap());
        assert!(!TodoStore::delete_by_id(&store, todo.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_category_lookup_reads_association() {
        let store = MemoryStore::new();

        let todo = TodoStore::save(&store, draft("tagged", Some(7))).await.unwrap();

        assert_eq!(store.find_category_id_by_todo_id(todo.id).await.unwrap(), Some(7));
        assert_eq!(store.find_category_id_by_todo_id(9999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_user_lookup_by_email() {
        let store = MemoryStore::new();

        UserStore::save(
            &store,
            UserDraft {
                id: None,
                email: "ada@example.com".to_string(),
                password_hash: "$argon2id$stub".to_string(),
                name: None,
            },
        )
        .await
        .unwrap();

        assert!(store.find_by_email("ada@example.com").await.unwrap().is_some());
        assert!(store.find_by_email("nobody@example.com").await.unwrap().is_none());
    }
}
