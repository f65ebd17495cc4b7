//! Beacon - homelab service dashboard
//!
//! Serves the service catalog as a searchable card grid, with a JSON API
//! over the same render-then-filter pipeline.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod page;

pub use config::{load_config, Config};
pub use error::{BeaconError, Result};

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

/// Serve the dashboard on an already bound listener until `cancel` fires
pub async fn serve(
    config: Config,
    listener: TcpListener,
    cancel: CancellationToken,
) -> Result<()> {
    let router = dashboard::build_router(
        Arc::new(config.services),
        config.page,
        config.server.app_dir.as_deref(),
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
        })
        .await
        .map_err(|e| BeaconError::Server(e.to_string()))?;

    tracing::debug!("Dashboard stopped");
    Ok(())
}

/// Run the beacon service with the given configuration
pub async fn run(config: Config) -> Result<()> {
    config.validate()?;

    let cancel = CancellationToken::new();

    // Setup shutdown handler
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
            return;
        }
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });

    match &config.server.app_dir {
        Some(dir) if !dir.is_dir() => {
            tracing::warn!("Front end directory {:?} does not exist", dir)
        }
        Some(dir) => tracing::info!("Serving front end from {:?} at /app/", dir),
        None => tracing::debug!("No front end directory configured"),
    }

    let addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.port)
        .parse()
        .map_err(|e| {
            BeaconError::Config(format!(
                "Invalid bind address {}:{}: {}",
                config.server.bind_address, config.server.port, e
            ))
        })?;

    let listener = TcpListener::bind(addr).await.map_err(|e| {
        BeaconError::Server(format!("Failed to bind dashboard to {}: {}", addr, e))
    })?;

    tracing::info!(
        "Dashboard listening on http://{} ({} services)",
        addr,
        config.services.len()
    );

    serve(config, listener, cancel).await?;

    tracing::info!("Beacon stopped");
    Ok(())
}
