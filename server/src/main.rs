//! contacts-server: serves the contacts pages and JSON API.
//!
//! Run from repo root: `cargo run -p contacts-server`
//! Configuration comes from the environment (and `.env`); see `ServerConfig::from_env`.

use contacts::{
    app, ensure_database_exists, AppOptions, AppState, ContactStore, MemoryStore, PgStore, ServerConfig,
    StoreBackend,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "contacts=info,contacts_server=info";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let store = build_store(&config).await?;
    let state = AppState::new(store);
    let app = app(
        state,
        AppOptions {
            max_body_bytes: config.max_body_bytes,
        },
    );

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("contacts listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await?;
    tracing::info!("contacts stopped");
    Ok(())
}

async fn build_store(config: &ServerConfig) -> Result<Arc<dyn ContactStore>, Box<dyn std::error::Error>> {
    match &config.store {
        StoreBackend::Memory => {
            let store = if config.seed {
                MemoryStore::seeded()
            } else {
                MemoryStore::new()
            };
            tracing::info!(contacts = store.len().await, "using in-memory store");
            Ok(Arc::new(store))
        }
        StoreBackend::Postgres {
            database_url,
            schema,
            max_connections,
        } => {
            ensure_database_exists(database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(*max_connections)
                .connect(database_url)
                .await?;
            let store = PgStore::new(pool, schema);
            store.ensure_schema().await?;
            if config.seed {
                let inserted = store.seed_if_empty().await?;
                if inserted > 0 {
                    tracing::info!(inserted, "seeded demo contacts");
                }
            }
            tracing::info!(schema = %schema, "using postgres store");
            Ok(Arc::new(store))
        }
    }
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
            }
            _ => {
                tracing::warn!("signal handlers unavailable, falling back to ctrl-c");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
