use std::net::SocketAddr;
use std::path::PathBuf;

use axum::{Router, routing::get, routing::post};
use tokio::net::TcpListener;
use tower_http::decompression::RequestDecompressionLayer;
use tracing::info;

use super::{
    services::{health, ingest_assets},
    state::AppState,
};
use crate::config::Config;
use crate::ingest::AssetIngestor;
use crate::storage::StorageClient;

type AnyError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Routes served by the ingest API
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/assets", post(ingest_assets))
        .route("/operators/health", get(health))
        .route("/health", get(health))
        .with_state(state)
        // Clients may gzip large photo payloads
        .layer(RequestDecompressionLayer::new())
}

pub async fn run(
    address: Option<SocketAddr>,
    config_path: Option<PathBuf>,
) -> Result<(), AnyError> {
    info!("Loading configuration");
    let config =
        Config::load_with(config_path).map_err(|e| format!("Failed to load config: {}", e))?;

    info!(
        provider = ?config.storage.provider,
        container = %config.storage.container,
        connection = %config.storage.connection_descriptor(),
        "Opening destination storage"
    );
    let storage = StorageClient::from_config(&config.storage)
        .map_err(|e| format!("Failed to open storage: {}", e))?;

    let address = address.unwrap_or(config.server.bind_addr);
    let state = AppState::new(config, AssetIngestor::default(), storage);
    let app = router(state);

    let listener = TcpListener::bind(address).await?;
    info!(%address, "Inspection ingest API listening");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
