//! Distributed tracing export.
//!
//! # Responsibilities
//! - Build the OTLP span exporter and batching tracer provider
//! - Bridge `tracing` spans and events into OpenTelemetry
//! - Register W3C Trace Context propagation
//!
//! # Design Decisions
//! - Optional: disabled by default, no collector required
//! - Log events inside spans are exported as span events
//! - `service.name` resource attribute comes from config

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::{ExporterBuildError, WithExportConfig};
use opentelemetry_sdk::propagation::TraceContextPropagator;
use opentelemetry_sdk::trace::SdkTracerProvider;
use opentelemetry_sdk::Resource;
use tracing::Subscriber;
use tracing_subscriber::{registry::LookupSpan, Layer};

use crate::config::ObservabilityConfig;

/// Create a tracer provider exporting batched spans to `otlp_endpoint`.
pub fn build_provider(config: &ObservabilityConfig) -> Result<SdkTracerProvider, ExporterBuildError> {
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(config.otlp_endpoint.clone())
        .build()?;

    let provider = SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .with_resource(service_resource(&config.service_name))
        .build();

    opentelemetry::global::set_text_map_propagator(TraceContextPropagator::new());
    opentelemetry::global::set_tracer_provider(provider.clone());

    Ok(provider)
}

/// Resource identifying this service on exported spans.
pub fn service_resource(service_name: &str) -> Resource {
    Resource::builder()
        .with_service_name(service_name.to_string())
        .build()
}

/// `tracing` layer forwarding spans to the provider's tracer.
pub fn layer<S>(provider: &SdkTracerProvider, service_name: &str) -> impl Layer<S>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    let tracer = provider.tracer(service_name.to_string());
    tracing_opentelemetry::layer().with_tracer(tracer)
}
