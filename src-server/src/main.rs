//! Zeiglist Server Entry Point

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use zeiglist_server::config::{ServerConfig, StoreConfig};
use zeiglist_server::repository::{init_db, AirtableStore, RecordStore, SqliteStore};
use zeiglist_server::{build_router, AppState};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn open_store(config: &StoreConfig) -> Result<Arc<dyn RecordStore>, String> {
    match config {
        StoreConfig::Airtable(airtable) => {
            info!(base = %airtable.base_id, table = %airtable.table_name, "using airtable store");
            Ok(Arc::new(AirtableStore::new(airtable.clone())))
        }
        StoreConfig::Sqlite(path) => {
            info!(path = %path.display(), "using sqlite store");
            let conn = init_db(path)?;
            Ok(Arc::new(SqliteStore::new(Arc::new(Mutex::new(conn)))))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
    }
    info!("shutting down");
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_tracing();

    let config = ServerConfig::from_env().map_err(|e| {
        error!(error = %e, "invalid configuration");
        e.to_string()
    })?;

    let store = open_store(&config.store)?;

    // Connectivity check; a failure is logged but not fatal
    match store.ping().await {
        Ok(()) => info!("connected to record store"),
        Err(e) => error!(error = %e, "failed to connect to record store"),
    }

    let app = build_router(AppState::new(store), &config.static_dir);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| format!("failed to bind {}: {}", addr, e))?;

    info!(%addr, static_dir = %config.static_dir.display(), "server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| e.to_string())
}
