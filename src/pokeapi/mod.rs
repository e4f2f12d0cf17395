//! Species retrieval from the public PokeAPI.
//!
//! # Data Flow
//! ```text
//! species name (path segment, verbatim)
//!     → client.rs (build URL, one GET, no retry)
//!     → status check (non-2xx → RetrievalError::Status)
//!     → types.rs (JSON body → SpeciesInfo, mismatch → RetrievalError::Schema)
//!     → caller (http handler) maps the outcome to a response
//! ```
//!
//! # Design Decisions
//! - Stateless: every call builds and drops its own HTTP client
//! - No caching, no retries, no name normalization
//! - Every failure is a value in `RetrievalError`, tagged by kind

pub mod client;
pub mod error;
pub mod types;

pub use client::{PokeApiClient, DEFAULT_BASE_URL};
pub use error::{RetrievalError, RetrievalResult};
pub use types::{Generation, SpeciesInfo};
