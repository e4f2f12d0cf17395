//! Structured logging.
//!
//! # Responsibilities
//! - Build the log filter from config and `RUST_LOG`
//! - Provide the fmt layer in the configured format
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - JSON format for production, pretty format for development
//! - `RUST_LOG` overrides the configured level

use tracing::Subscriber;
use tracing_subscriber::{fmt, registry::LookupSpan, EnvFilter, Layer};

use crate::config::LogFormat;

/// Filter directives used when `RUST_LOG` is not set.
pub fn default_directives(log_level: &str) -> String {
    let level = log_level.to_ascii_lowercase();
    format!("pokemon_info={level},tower_http={level}")
}

/// Log filter: `RUST_LOG` if present, otherwise the configured level.
pub fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(log_level)))
}

/// Stdout formatting layer.
pub fn fmt_layer<S>(format: LogFormat) -> Box<dyn Layer<S> + Send + Sync + 'static>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    match format {
        LogFormat::Pretty => fmt::layer().with_target(true).boxed(),
        LogFormat::Json => fmt::layer().json().with_current_span(true).boxed(),
    }
}
