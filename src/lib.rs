//! PokeAPI species lookup service library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod pokeapi;

pub use config::schema::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use pokeapi::{PokeApiClient, RetrievalError, SpeciesInfo};
