pub mod api;
pub mod config;
pub mod model;
pub mod seed;
pub mod store;

// Export API types
pub use api::handlers;
pub use api::routes;

// Export all model types
pub use model::*;

// Export store types
pub use store::{MemoryStore, PostgresStore, Store};

use std::sync::Arc;

use crate::config::AppConfig;

async fn seed_if_requested<S: Store>(store: &S) -> anyhow::Result<()> {
    if std::env::var("LOAD_SEED_DATA").unwrap_or_default() == "true" {
        log::info!("Loading seed data...");
        seed::load_seed_data(store).await?;
    }
    Ok(())
}

/// Serve the API on the configured address until the listener fails
pub async fn serve<S: Store + 'static>(store: Arc<S>, config: &AppConfig) -> anyhow::Result<()> {
    let app = api::routes::create_router().with_state(store);

    let bind_address = config.server_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    log::info!("Family tree API listening on http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Open the store selected by `config`, reconcile its schema and serve
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    log::warn!(
        "JWT secret configured ({} bytes) but no route requires authentication",
        config.auth.jwt_secret.len()
    );

    if config.database.in_memory {
        log::info!("Using in-memory store; data is lost on exit");
        let store = MemoryStore::new();
        seed_if_requested(&store).await?;
        return serve(Arc::new(store), &config).await;
    }

    log::info!(
        "Connecting to PostgreSQL at {}:{}/{}",
        config.database.host,
        config.database.port,
        config.database.name
    );
    let store =
        PostgresStore::new(&config.database_url(), config.database.max_connections).await?;
    store.migrate().await?;
    seed_if_requested(&store).await?;

    serve(Arc::new(store), &config).await
}

// Function for integration testing
pub async fn run_server() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    run(AppConfig::load()?).await
}
