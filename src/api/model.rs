// src/api/model.rs
//
// Explicit schema for the subset of the PokeAPI pokemon endpoint we
// consume. Unknown fields are ignored; a missing required field fails
// the whole parse (FetchError::Parse) rather than faulting later.

use serde::Deserialize;

use super::FetchError;

#[derive(Clone, Debug, Deserialize)]
pub struct PokemonResponse {
    pub name: String,
    pub sprites: Sprites,
    pub stats: Vec<StatEntry>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Sprites {
    /// Front sprite PNG; null for a few forms, so optional.
    pub front_default: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    pub stat: StatRef,
}

#[derive(Clone, Debug, Deserialize)]
pub struct StatRef {
    pub name: String,
}

/// Parse a 200 body. `ident` is only used to label the error.
pub fn parse_response(body: &str, ident: &str) -> Result<PokemonResponse, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Parse {
        ident: s!(ident),
        detail: e.to_string(),
    })
}
