//! Serve command implementation
//!
//! Builds the configured storage backend once, then runs the HTTP API until a
//! shutdown signal arrives.

use crate::adapters::repository::create_storage;
use crate::api::{router, AppState};
use crate::config::load_config;
use crate::domain::CatalogError;
use clap::Args;
use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::watch;

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Override `[server] host`
    #[arg(long)]
    pub host: Option<String>,

    /// Override `[server] port`
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl ServeArgs {
    /// Execute the serve command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, config_path = %config_path, "Failed to load configuration");
                eprintln!("❌ Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        if let Some(ref host) = self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }

        let storage = match create_storage(&config).await {
            Ok(s) => s,
            Err(e @ CatalogError::Configuration(_)) => {
                eprintln!("❌ {e}");
                return Ok(2);
            }
            Err(e) => {
                crate::log_error_with_context!(&e, "Failed to initialize storage");
                eprintln!("❌ Failed to initialize storage: {e}");
                return Ok(5);
            }
        };

        let state = Arc::new(AppState::from_storage(
            storage,
            Duration::from_secs(config.health.readiness_timeout_seconds),
        ));

        let bind_address = config.server.bind_address();
        let listener = match TcpListener::bind(&bind_address).await {
            Ok(l) => l,
            Err(e) => {
                tracing::error!(error = %e, address = %bind_address, "Failed to bind");
                eprintln!("❌ Failed to bind {bind_address}: {e}");
                return Ok(5);
            }
        };

        let local_addr = listener.local_addr()?;
        tracing::info!(
            address = %local_addr,
            storage_backend = %config.storage_backend,
            environment = ?config.environment,
            "Catalog API listening"
        );
        println!("🚀 Catalog API listening on http://{local_addr}");

        serve(
            listener,
            state,
            shutdown_signal,
            Duration::from_secs(config.server.shutdown_timeout_secs),
        )
        .await?;

        println!("👋 Catalog API stopped");
        Ok(0)
    }
}

/// Run the API on `listener` until `shutdown_signal` flips to `true`
///
/// In-flight requests get up to `grace` to finish once the signal arrives.
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections.
pub async fn serve(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown_signal: watch::Receiver<bool>,
    grace: Duration,
) -> anyhow::Result<()> {
    let server = axum::serve(listener, router(state))
        .with_graceful_shutdown(wait_for_shutdown(shutdown_signal.clone()))
        .into_future();

    let deadline = async {
        wait_for_shutdown(shutdown_signal).await;
        tokio::time::sleep(grace).await;
    };

    tokio::select! {
        result = server => {
            result?;
            tracing::info!("Server shut down gracefully");
        }
        _ = deadline => {
            tracing::warn!(
                timeout_secs = grace.as_secs(),
                "Graceful shutdown timed out, dropping in-flight requests"
            );
        }
    }

    Ok(())
}

/// Resolves once the shutdown flag is set
///
/// A closed channel never resolves; the process then stops only when killed.
async fn wait_for_shutdown(mut shutdown_signal: watch::Receiver<bool>) {
    while !*shutdown_signal.borrow_and_update() {
        if shutdown_signal.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
    tracing::info!("Shutdown signal received, draining connections");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::repository::Storage;

    #[tokio::test]
    async fn test_wait_for_shutdown_resolves_on_signal() {
        let (tx, rx) = watch::channel(false);
        let waiter = tokio::spawn(wait_for_shutdown(rx));

        tx.send(true).unwrap();
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .unwrap()
            .unwrap();
    }

    #[tokio::test]
    async fn test_serve_stops_on_signal() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let state = Arc::new(AppState::from_storage(
            Storage::in_memory(),
            Duration::from_secs(5),
        ));
        let (tx, rx) = watch::channel(false);

        let handle = tokio::spawn(serve(listener, state, rx, Duration::from_secs(5)));
        tx.send(true).unwrap();

        let result = tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .unwrap()
            .unwrap();
        assert!(result.is_ok());
    }
}
