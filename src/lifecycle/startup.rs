//! Startup orchestration.
//!
//! # Responsibilities
//! - Initialize telemetry and metrics in dependency order
//! - Bind the listener and serve until an OS signal triggers shutdown
//! - Flush telemetry once the server has stopped
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last (traffic only when ready)

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ServiceConfig;
use crate::http::HttpServer;
use crate::lifecycle::shutdown::Shutdown;
use crate::lifecycle::signals::wait_for_signal;
use crate::observability::{self, metrics, ObservabilityError};

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Observability(#[from] ObservabilityError),

    #[error("invalid metrics address '{0}'")]
    MetricsAddress(String),

    #[error("failed to serve on {address}: {source}")]
    Serve {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

/// Boot the service with `config` and serve until shutdown.
pub async fn run(config: ServiceConfig) -> Result<(), StartupError> {
    let telemetry = observability::init(&config.observability)?;

    tracing::info!("pokemon-info v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config
            .observability
            .metrics_address
            .parse()
            .map_err(|_| StartupError::MetricsAddress(config.observability.metrics_address.clone()))?;
        metrics::init_metrics(addr).map_err(ObservabilityError::from)?;
    }

    let address = config.listener.bind_address.clone();
    let serve_error = |source| StartupError::Serve { address: address.clone(), source };

    let listener = TcpListener::bind(&address).await.map_err(serve_error)?;
    tracing::info!(address = %listener.local_addr().map_err(serve_error)?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        wait_for_signal().await;
        signal_shutdown.trigger();
    });

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await.map_err(serve_error)?;

    telemetry.shutdown()?;
    tracing::info!("Shutdown complete");
    Ok(())
}
