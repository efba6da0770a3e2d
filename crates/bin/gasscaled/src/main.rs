//! # gasscaled: gas-scale daemon
//!
//! Composition root that wires a reading source into the HTTP adapter and
//! starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`gasscale.toml`, env vars)
//! - Initialise `tracing` from the configured filter
//! - Construct the configured reading source (random or scale)
//! - Build the axum router around the telemetry service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use tracing_subscriber::EnvFilter;

use gasscale_adapter_http_axum::router;
use gasscale_adapter_http_axum::state::AppState;
use gasscale_adapter_scale::ScaleReadingSource;
use gasscale_adapter_virtual::RandomReadingSource;
use gasscale_app::ports::ReadingSource;
use gasscale_app::services::telemetry_service::TelemetryService;

use crate::config::{Config, SourceKind};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    match config.source.kind {
        SourceKind::Random => serve(&config, RandomReadingSource::new(config.scale.count)).await,
        SourceKind::Scale => serve(&config, ScaleReadingSource::simulated(&config.scale)).await,
    }
}

async fn serve<S>(config: &Config, source: S) -> Result<(), Box<dyn std::error::Error>>
where
    S: ReadingSource + Send + Sync + 'static,
{
    let state =
        AppState::new(TelemetryService::new(source)).with_status_interval(config.status_interval());
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        address = %bind_addr,
        source = %config.source.kind,
        scales = config.scale.count,
        "gasscaled listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("gasscaled stopped");
    Ok(())
}

/// Resolves on Ctrl-C or, on unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
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
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received ctrl-c, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
