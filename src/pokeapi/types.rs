//! Species payload projected from the upstream `pokemon-species` resource.

use serde::{Deserialize, Serialize};

/// Evolutionary generation group a species belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Generation {
    pub name: String,
}

/// One species record.
///
/// Only built by deserializing an upstream body; all other upstream fields
/// are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SpeciesInfo {
    /// Upstream-assigned identity.
    pub id: u64,
    pub name: String,
    pub generation: Generation,
}

impl SpeciesInfo {
    /// Decode a species from a raw upstream JSON body.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}
