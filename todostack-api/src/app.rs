/// Application state and router builder
///
/// This module defines the shared application state and provides a
/// function to build the Axum router with all routes and middleware.
/// Store collaborators are passed in explicitly, so the same router runs
/// over Postgres in production and the in-memory store in tests.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use todostack_api::app::{build_router, AppState};
/// use todostack_shared::store::memory::MemoryStore;
///
/// let store = Arc::new(MemoryStore::new());
/// let state = AppState::new(store.clone(), store.clone(), store);
/// let app = build_router(state);
/// ```

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use todostack_shared::store::{CategoryStore, TodoStore, UserStore};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::services::{TodoService, UserService};

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor; the
/// services clone cheaply (`Arc` inside).
#[derive(Clone)]
pub struct AppState {
    /// Todo business logic
    pub todos: TodoService,

    /// User business logic
    pub users: UserService,
}

impl AppState {
    /// Creates application state over the given store collaborators
    pub fn new(
        todos: Arc<dyn TodoStore>,
        categories: Arc<dyn CategoryStore>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            todos: TodoService::new(todos, categories),
            users: UserService::new(users),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── /health                       # Health check
/// └── /v1/                          # API v1 (versioned)
///     ├── /todos/
///     │   ├── POST   /              # Create or update a todo
///     │   ├── GET    /              # List all todos
///     │   ├── GET    /:id           # Fetch one todo (category attached)
///     │   └── DELETE /:id           # Delete a todo
///     ├── /categories/:id/todos     # List todos for a category
///     ├── /users/                   # User CRUD
///     └── /auth/login               # Credential login
/// ```
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    let todo_routes = Router::new()
        .route(
            "/",
            post(routes::todos::create_todo).get(routes::todos::list_todos),
        )
        .route(
            "/:id",
            get(routes::todos::get_todo).delete(routes::todos::delete_todo),
        );

    let category_routes =
        Router::new().route("/:id/todos", get(routes::todos::list_todos_by_category));

    let user_routes = Router::new()
        .route(
            "/",
            post(routes::users::create_user).get(routes::users::list_users),
        )
        .route(
            "/:id",
            get(routes::users::get_user).delete(routes::users::delete_user),
        );

    let auth_routes = Router::new().route("/login", post(routes::users::login));

    let v1_routes = Router::new()
        .nest("/todos", todo_routes)
        .nest("/categories", category_routes)
        .nest("/users", user_routes)
        .nest("/auth", auth_routes);

    Router::new()
        .merge(health_routes)
        .nest("/v1", v1_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
