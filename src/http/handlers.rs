//! Route handlers.

use std::time::Instant;

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Response,
    Json,
};
use serde::Serialize;

use crate::http::request::RequestIdExt;
use crate::http::response::species_response;
use crate::http::server::AppState;
use crate::observability::metrics;

/// Route template for species lookups.
pub const SPECIES_ROUTE: &str = "/pokemon/{name}";

/// Route for liveness checks.
pub const HEALTH_ROUTE: &str = "/health";

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// `GET /pokemon/{name}`: forward to the PokeAPI client and map the outcome.
pub async fn get_species(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(name): Path<String>,
) -> Response {
    let start_time = Instant::now();

    tracing::debug!(
        request_id = %headers.request_id(),
        species = %name,
        "Species lookup"
    );

    let result = state.client.retrieve(&name).await;
    metrics::record_upstream(match &result {
        Ok(_) => "success",
        Err(e) => e.kind(),
    });

    let response = species_response(result, state.response_mode);
    metrics::record_request(SPECIES_ROUTE, response.status().as_u16(), start_time);
    response
}

/// `GET /health`
pub async fn get_health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
