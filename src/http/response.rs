//! Response mapping for species lookups.
//!
//! # Responsibilities
//! - Turn a retrieval outcome into status code + JSON body
//! - Support the legacy "error text with 200" contract
//!
//! # Design Decisions
//! - Strict mode: 404 for unknown species, 502 for other upstream failures,
//!   504 for upstream timeouts, 500 for payloads that do not match
//! - Legacy mode: upstream failures answer 200 with a bare JSON string;
//!   payload mismatches still answer 500

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::config::ResponseMode;
use crate::pokeapi::{RetrievalError, RetrievalResult, SpeciesInfo};

/// Error body returned in strict mode.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

/// Status code a failed retrieval maps to.
pub fn error_status(err: &RetrievalError, mode: ResponseMode) -> StatusCode {
    match (mode, err) {
        (_, RetrievalError::Schema(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        (ResponseMode::Legacy, _) => StatusCode::OK,
        (ResponseMode::Strict, RetrievalError::Status { status: 404, .. }) => StatusCode::NOT_FOUND,
        (ResponseMode::Strict, RetrievalError::Timeout(_)) => StatusCode::GATEWAY_TIMEOUT,
        (ResponseMode::Strict, _) => StatusCode::BAD_GATEWAY,
    }
}

/// Build the HTTP response for a species lookup.
pub fn species_response(result: RetrievalResult<SpeciesInfo>, mode: ResponseMode) -> Response {
    let err = match result {
        Ok(species) => return (StatusCode::OK, Json(species)).into_response(),
        Err(err) => err,
    };

    let status = error_status(&err, mode);
    match mode {
        ResponseMode::Strict => (
            status,
            Json(ErrorBody {
                error: err.kind(),
                message: err.to_string(),
            }),
        )
            .into_response(),
        ResponseMode::Legacy if err.is_upstream() => (status, Json(err.to_string())).into_response(),
        ResponseMode::Legacy => (status, "Internal Server Error").into_response(),
    }
}
