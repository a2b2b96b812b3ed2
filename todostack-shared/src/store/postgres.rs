/// Postgres-backed store implementations
///
/// Each store wraps a [`PgPool`] and maps rows with `query_as`. Upserts use
/// `INSERT … ON CONFLICT (id) DO UPDATE` so a draft with an explicit id
/// lands on that row whether or not it already exists, matching the store
/// contract.
///
/// # Example
///
/// ```no_run
/// use todostack_shared::db::pool::{create_pool, DatabaseConfig};
/// use todostack_shared::store::postgres::PgTodoStore;
/// use todostack_shared::store::TodoStore;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig {
///     url: std::env::var("DATABASE_URL")?,
///     ..Default::default()
/// })
/// .await?;
///
/// let todos = PgTodoStore::new(pool);
/// let all = todos.find_all().await?;
/// println!("{} todos", all.len());
/// # Ok(())
/// # }
/// ```

use crate::models::todo::{Todo, TodoDraft};
use crate::models::user::{User, UserDraft};
use crate::store::{CategoryStore, StoreResult, TodoStore, UserStore};
use async_trait::async_trait;
use sqlx::PgPool;

/// Todo persistence over Postgres
#[derive(Debug, Clone)]
pub struct PgTodoStore {
    pool: PgPool,
}

impl PgTodoStore {
    /// Creates a store over the given pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoStore for PgTodoStore {
    async fn save(&self, draft: TodoDraft) -> StoreResult<Todo> {
        let todo = match draft.id {
            None => {
                sqlx::query_as::<_, Todo>(
                    r#"
                    INSERT INTO todos (user_id, category_id, title, description, completed)
                    VALUES ($1, $2, $3, $4, $5)
                    RETURNING id, user_id, category_id, title, description, completed,
                              created_at, updated_at
                    "#,
                )
                .bind(draft.user_id)
                .bind(draft.category_id)
                .bind(draft.title)
                .bind(draft.description)
                .bind(draft.completed)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => {
                sqlx::query_as::<_, Todo>(
                    r#"
                    INSERT INTO todos (id, user_id, category_id, title, description, completed)
                    VALUES ($1, $2, $3, $4, $5, $6)
                    ON CONFLICT (id) DO UPDATE
                    SET user_id = EXCLUDED.user_id,
                        category_id = EXCLUDED.category_id,
                        title = EXCLUDED.title,
                        description = EXCLUDED.description,
                        completed = EXCLUDED.completed,
                        updated_at = NOW()
                    RETURNING id, user_id, category_id, title, description, completed,
                              created_at, updated_at
                    "#,
                )
                .bind(id)
                .bind(draft.user_id)
                .bind(draft.category_id)
                .bind(draft.title)
                .bind(draft.description)
                .bind(draft.completed)
                .fetch_one(&self.pool)
                .await?
            }
        };

        Ok(todo)
    }

    async fn find_all(&self) -> StoreResult<Vec<Todo>> {
        let todos = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, user_id, category_id, title, description, completed,
                   created_at, updated_at
            FROM todos
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(todos)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Todo>> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, user_id, category_id, title, description, completed,
                   created_at, updated_at
            FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(todo)
    }

    async fn find_by_category_id(&self, category_id: i64) -> StoreResult<Vec<Todo>> {
        let todos = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, user_id, category_id, title, description, completed,
                   created_at, updated_at
            FROM todos
            WHERE category_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(todos)
    }

    async fn delete_by_id(&self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Category association lookups over Postgres
#[derive(Debug, Clone)]
pub struct PgCategoryStore {
    pool: PgPool,
}

impl PgCategoryStore {
    /// Creates a store over the given pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryStore for PgCategoryStore {
    async fn find_category_id_by_todo_id(&self, todo_id: i64) -> StoreResult<Option<i64>> {
        let row: Option<(Option<i64>,)> =
            sqlx::query_as("SELECT category_id FROM todos WHERE id = $1")
                .bind(todo_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.and_then(|(category_id,)| category_id))
    }
}

/// User persistence over Postgres
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// Creates a store over the given pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn save(&self, draft: UserDraft) -> StoreResult<User> {
        let user = match draft.id {
            None => {
                sqlx::query_as::<_, User>(
                    r#"
                    INSERT INTO users (email, password_hash, name)
                    VALUES ($1, $2, $3)
                    RETURNING id, email, password_hash, name, created_at, updated_at
                    "#,
                )
                .bind(draft.email)
                .bind(draft.password_hash)
                .bind(draft.name)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => {
                sqlx::query_as::<_, User>(
                    r#"
                    INSERT INTO users (id, email, password_hash, name)
                    VALUES ($1, $2, $3, $4)
                    ON CONFLICT (id) DO UPDATE
                    SET email = EXCLUDED.email,
                        password_hash = EXCLUDED.password_hash,
                        name = EXCLUDED.name,
                        updated_at = NOW()
                    RETURNING id, email, password_hash, name, created_at, updated_at
                    "#,
                )
                .bind(id)
                .bind(draft.email)
                .bind(draft.password_hash)
                .bind(draft.name)
                .fetch_one(&self.pool)
                .await?
            }
        };

        Ok(user)
    }

    async fn find_all(&self) -> StoreResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, name, created_at, updated_at
            FROM users
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, name, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, name, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn delete_by_id(&self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
