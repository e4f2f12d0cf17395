//! PokeAPI species lookup service.
//!
//! # Architecture Overview
//!
//! ```text
//!                         ┌──────────────────────────────────────────────┐
//!                         │               POKEMON-INFO                   │
//!                         │                                              │
//!   GET /pokemon/{name}   │  ┌──────────┐   ┌──────────┐   ┌──────────┐  │
//!   ──────────────────────┼─▶│  http    │──▶│ handlers │──▶│ pokeapi  │──┼──▶ pokeapi.co
//!                         │  │ server   │   │          │   │  client  │  │   /pokemon-species/{name}/
//!   ◀─────────────────────┼──│          │◀──│ response │◀──│          │◀─┼───
//!   SpeciesInfo / error   │  └──────────┘   └──────────┘   └──────────┘  │
//!                         │                                              │
//!                         │  ┌────────────────────────────────────────┐  │
//!                         │  │  config │ observability │ lifecycle    │  │
//!                         │  └────────────────────────────────────────┘  │
//!                         └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use pokemon_info::config::{load_config, validate_config, ConfigError, ResponseMode, ServiceConfig};
use pokemon_info::lifecycle;

#[derive(Parser)]
#[command(name = "pokemon-info")]
#[command(about = "HTTP service returning species information from PokeAPI", long_about = None)]
struct Cli {
    /// TOML configuration file; defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,

    /// Answer upstream failures with 200 and the error text.
    #[arg(long)]
    legacy_responses: bool,
}

fn resolve_config(cli: &Cli) -> Result<ServiceConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    if let Some(bind) = &cli.bind {
        config.listener.bind_address = bind.clone();
    }
    if cli.legacy_responses {
        config.responses.mode = ResponseMode::Legacy;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    lifecycle::run(config).await?;
    Ok(())
}
