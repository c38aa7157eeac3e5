mod dto;
mod forms;
mod handlers;
mod models;
mod repository;
mod service;
mod templates;

use std::{env, sync::Arc};

use handlers::app_router;
use repository::PgRepository;
use service::NoteService;

#[tokio::main]
async fn main() {
    // Log setup
    tracing_subscriber::fmt::init();

    // Fetch env variables
    let database_dsn =
        env::var("PG_DSN").expect("database dsn must be provided as an ENV variable");
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

    // Repository creation and migration
    let mut repo = PgRepository::new(database_dsn).await.unwrap_or_else(|e| {
        tracing::error!("Failed to establish database connection: {e}");
        panic!("failed to establish database connection: {e}");
    });

    repo.migrate().await.unwrap_or_else(|e| {
        tracing::error!("Failed to migrate database: {e}");
        panic!("failed to migrate database: {e}");
    });

    // Service creation with an injected store handle
    let service = Arc::new(NoteService::new(Arc::new(repo)));

    // Route table resolved once at startup
    let router = app_router(service);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {bind_addr}: {e}"));
    let addr = listener
        .local_addr()
        .expect("bound listener has a local address");

    tracing::info!("Sticky notes server starting, listening on {}", addr);

    if let Err(e) = axum::serve(listener, router).await {
        tracing::error!("HTTP server error: {e}");
        panic!("failed to start HTTP server: {e}");
    }
}
