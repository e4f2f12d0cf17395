//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!     → tracing.rs (spans exported over OTLP)
//!
//! Consumers:
//!     → stdout (pretty or JSON lines)
//!     → Metrics endpoint (Prometheus scrape)
//!     → OTLP collector (optional)
//! ```
//!
//! # Design Decisions
//! - Initialized once at startup; `Telemetry` owns the exporter lifecycle
//! - Request and retrieval code only emit `tracing` events and spans, so
//!   it runs unchanged with no subscriber installed
//! - Span export is opt-in to avoid requiring a collector

pub mod logging;
pub mod metrics;
pub mod tracing;

use opentelemetry_sdk::trace::SdkTracerProvider;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ObservabilityConfig;

/// Errors raised while initializing or shutting down observability.
#[derive(Debug, Error)]
pub enum ObservabilityError {
    /// Failed to build OTLP exporter.
    #[error("failed to build OTLP exporter: {0}")]
    OtlpExporter(#[from] opentelemetry_otlp::ExporterBuildError),

    /// Failed to initialize tracing subscriber.
    #[error("failed to initialize tracing subscriber: {0}")]
    TracingSubscriber(#[from] tracing_subscriber::util::TryInitError),

    /// Failed to install the Prometheus exporter.
    #[error("failed to install metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    /// Pending spans could not be flushed.
    #[error("failed to shut down tracer provider: {0}")]
    Shutdown(#[from] opentelemetry_sdk::error::OTelSdkError),
}

/// Handle to the process-wide telemetry pipeline.
///
/// Keep it alive for the lifetime of the server and call `shutdown` once
/// traffic has drained so batched spans are flushed.
#[derive(Debug, Default)]
pub struct Telemetry {
    provider: Option<SdkTracerProvider>,
}

impl Telemetry {
    /// A handle with no span exporter attached.
    pub fn disabled() -> Self {
        Self { provider: None }
    }

    /// Whether spans are being exported.
    pub fn is_exporting(&self) -> bool {
        self.provider.is_some()
    }

    /// Flush and stop the span exporter, if any.
    pub fn shutdown(self) -> Result<(), ObservabilityError> {
        if let Some(provider) = self.provider {
            provider.shutdown()?;
            ::tracing::info!("Tracer provider shut down");
        }
        Ok(())
    }
}

/// Install the global subscriber: env filter, optional OTLP layer, fmt layer.
pub fn init(config: &ObservabilityConfig) -> Result<Telemetry, ObservabilityError> {
    let provider = if config.otlp_enabled {
        Some(self::tracing::build_provider(config)?)
    } else {
        None
    };
    let otel_layer = provider
        .as_ref()
        .map(|provider| self::tracing::layer(provider, &config.service_name));

    tracing_subscriber::registry()
        .with(logging::env_filter(&config.log_level))
        .with(otel_layer)
        .with(logging::fmt_layer(config.log_format))
        .try_init()?;

    ::tracing::info!(
        service_name = %config.service_name,
        otlp_enabled = config.otlp_enabled,
        otlp_endpoint = %config.otlp_endpoint,
        "Observability initialized"
    );

    Ok(Telemetry { provider })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_telemetry_shutdown_is_noop() {
        let telemetry = Telemetry::disabled();
        assert!(!telemetry.is_exporting());
        assert!(telemetry.shutdown().is_ok());
    }

    #[test]
    fn test_error_display() {
        let err = ObservabilityError::Shutdown(opentelemetry_sdk::error::OTelSdkError::AlreadyShutdown);
        assert!(err.to_string().starts_with("failed to shut down tracer provider"));
    }
}
