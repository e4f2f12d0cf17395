//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::pokeapi::DEFAULT_BASE_URL;

/// Root configuration for the species service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream PokeAPI settings.
    pub upstream: UpstreamConfig,

    /// Inbound timeout configuration.
    pub timeouts: TimeoutConfig,

    /// How retrieval outcomes become HTTP responses.
    pub responses: ResponseConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
        }
    }
}

/// Upstream species API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// API root; species are fetched from `{base_url}/pokemon-species/{name}/`.
    pub base_url: String,

    /// Per-request timeout in seconds. Unset means the HTTP client default.
    pub timeout_secs: Option<u64>,

    /// Honor `HTTP_PROXY`/`HTTPS_PROXY`/`NO_PROXY` from the environment.
    pub use_system_proxy: bool,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            use_system_proxy: true,
        }
    }
}

/// Timeout configuration for inbound requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Response mapping configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ResponseConfig {
    pub mode: ResponseMode,
}

/// How a failed retrieval is reported to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseMode {
    /// Upstream failures map to 404/502/504, payload mismatches to 500.
    #[default]
    Strict,
    /// Upstream failures answer 200 with the error text as a JSON string.
    Legacy,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Human-readable or JSON log lines.
    pub log_format: LogFormat,

    /// `service.name` resource attribute on exported spans.
    pub service_name: String,

    /// Export spans over OTLP.
    pub otlp_enabled: bool,

    /// OTLP gRPC collector endpoint.
    pub otlp_endpoint: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            service_name: "pokemon-info".to_string(),
            otlp_enabled: false,
            otlp_endpoint: "http://localhost:4317".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8000");
        assert_eq!(config.upstream.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.upstream.timeout_secs, None);
        assert_eq!(config.timeouts.request_secs, 30);
        assert_eq!(config.responses.mode, ResponseMode::Strict);
        assert!(!config.observability.otlp_enabled);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: ServiceConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, ListenerConfig::default().bind_address);
        assert_eq!(config.observability.service_name, "pokemon-info");
    }

    #[test]
    fn test_partial_toml() {
        let config: ServiceConfig = toml::from_str(
            r#"
            [upstream]
            timeout_secs = 5

            [responses]
            mode = "legacy"

            [observability]
            log_format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.upstream.timeout_secs, Some(5));
        assert_eq!(config.upstream.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.responses.mode, ResponseMode::Legacy);
        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let result: Result<ServiceConfig, _> = toml::from_str("[responses]\nmode = \"lenient\"\n");
        assert!(result.is_err());
    }
}
