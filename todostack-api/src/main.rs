//! # Todostack API Server
//!
//! This is the main API server for Todostack, exposing todo and user CRUD
//! over HTTP backed by PostgreSQL.
//!
//! ## Usage
//!
//! ```bash
//! DATABASE_URL=postgresql://localhost/todostack cargo run -p todostack-api
//! ```

use std::sync::Arc;
use todostack_api::app::{build_router, AppState};
use todostack_api::config::Config;
use todostack_shared::db::{migrations, pool};
use todostack_shared::store::postgres::{PgCategoryStore, PgTodoStore, PgUserStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todostack_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Todostack API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;

    let db = pool::create_pool(pool::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        ..Default::default()
    })
    .await?;

    migrations::run_migrations(&db).await?;

    let state = AppState::new(
        Arc::new(PgTodoStore::new(db.clone())),
        Arc::new(PgCategoryStore::new(db.clone())),
        Arc::new(PgUserStore::new(db)),
    );
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Server listening on http://{}", config.bind_address());

    axum::serve(listener, app).await?;

    Ok(())
}
