//! # alcsd — alcs daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise `tracing` from the configured filter
//! - Construct the configured store backing (in-memory or `SQLite`)
//! - Construct the application service, injecting the repository via the port trait
//! - Build the axum router, injecting the service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use alcs_adapter_http_axum::router;
use alcs_adapter_http_axum::state::AppState;
use alcs_adapter_storage_memory::InMemoryAlcoholRepository;
use alcs_adapter_storage_sqlite_sqlx::SqliteAlcoholRepository;
use alcs_app::ports::AlcoholRepository;
use alcs_app::services::alcohol_service::AlcoholService;

use crate::config::{Config, StorageBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    let filter = EnvFilter::try_new(&config.logging.filter)
        .with_context(|| format!("invalid log filter {:?}", config.logging.filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(backend = %config.storage.backend, "starting alcsd");

    match config.storage.backend {
        StorageBackend::Memory => serve(InMemoryAlcoholRepository::new(), &config).await,
        StorageBackend::Sqlite => {
            let db = alcs_adapter_storage_sqlite_sqlx::Config {
                database_url: config.database_url().to_string(),
                max_connections: config.storage.max_connections,
            }
            .build()
            .await
            .context("failed to initialise database")?;
            tracing::info!("database connected");

            let result = serve(SqliteAlcoholRepository::new(db.pool().clone()), &config).await;
            db.close().await;
            result
        }
    }
}

/// Serve the API over `repo` until a shutdown signal arrives.
async fn serve<R>(repo: R, config: &Config) -> anyhow::Result<()>
where
    R: AlcoholRepository + Send + Sync + 'static,
{
    let state = AppState::new(AlcoholService::new(repo));
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, "alcsd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("alcsd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(%err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::warn!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
