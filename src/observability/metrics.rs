//! Metrics collection and exposition.
//!
//! # Metrics
//! - `pokemon_requests_total` (counter): inbound requests by route, status
//! - `pokemon_request_duration_seconds` (histogram): inbound latency by route
//! - `pokemon_upstream_requests_total` (counter): retrieval outcomes by kind
//!
//! # Design Decisions
//! - Recording is a no-op until an exporter is installed
//! - Labels are low-cardinality (route template, status, outcome kind)

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one handled inbound request.
pub fn record_request(route: &'static str, status: u16, start: Instant) {
    counter!(
        "pokemon_requests_total",
        "route" => route,
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("pokemon_request_duration_seconds", "route" => route)
        .record(start.elapsed().as_secs_f64());
}

/// Record the outcome of one upstream retrieval (`success` or an error kind).
pub fn record_upstream(outcome: &'static str) {
    counter!("pokemon_upstream_requests_total", "outcome" => outcome).increment(1);
}
