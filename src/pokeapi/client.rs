//! PokeAPI species client.
//!
//! # Responsibilities
//! - Build the `pokemon-species` URL for a name
//! - Perform one GET per lookup with a per-call HTTP client
//! - Classify the outcome into `SpeciesInfo` or a tagged `RetrievalError`

use std::time::Duration;

use tracing::instrument;

use crate::config::UpstreamConfig;
use crate::pokeapi::error::{RetrievalError, RetrievalResult};
use crate::pokeapi::types::SpeciesInfo;

/// Public PokeAPI v2 root.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Species lookup client.
///
/// Holds only configuration; the underlying connection pool is created and
/// released inside each `retrieve` call.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    base_url: String,
    timeout: Option<Duration>,
    use_system_proxy: bool,
}

impl PokeApiClient {
    /// Create a client from upstream configuration.
    pub fn new(config: &UpstreamConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout_secs.map(Duration::from_secs),
            use_system_proxy: config.use_system_proxy,
        }
    }

    /// Upstream URL for a species name, substituted verbatim.
    pub fn species_url(&self, species_name: &str) -> String {
        format!("{}/pokemon-species/{}/", self.base_url, species_name)
    }

    /// Fetch species information for `species_name`.
    ///
    /// Transport and status failures come back as `RetrievalError::Status`,
    /// `Transport` or `Timeout`; a 2xx body of the wrong shape comes back as
    /// `RetrievalError::Schema`.
    #[instrument(name = "pokeapi.retrieve", skip_all, fields(species = %species_name))]
    pub async fn retrieve(&self, species_name: &str) -> RetrievalResult<SpeciesInfo> {
        let url = self.species_url(species_name);

        tracing::info!("Retrieving info for {}", species_name);

        let body = match self.fetch(&url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(
                    url = %url,
                    kind = e.kind(),
                    error = %e,
                    "http error while retrieving pokemon species"
                );
                return Err(e);
            }
        };

        SpeciesInfo::from_json(&body).map_err(|e| {
            tracing::error!(url = %url, error = %e, "Upstream species payload did not match");
            RetrievalError::from(e)
        })
    }

    async fn fetch(&self, url: &str) -> RetrievalResult<Vec<u8>> {
        let mut builder = reqwest::Client::builder().redirect(reqwest::redirect::Policy::none());
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if !self.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;

        let response = client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RetrievalError::Status {
                status: status.as_u16(),
                message: format!("HTTP status {} for url ({})", status, response.url()),
            });
        }

        tracing::info!(
            status = %status,
            url = %response.url(),
            "HTTP RESULT -> {:?}",
            response
        );

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new(&UpstreamConfig::default())
    }
}
