// src/api/mod.rs
//
// Boundary to the public PokeAPI: typed wire schema (model) and the
// blocking lookup client. Everything past this module works with
// already-validated records.

pub mod client;
pub mod model;

use std::error::Error;
use std::fmt;

/// Lookup failure for one identifier. The affected entity is excluded
/// from the comparison; nothing downstream retries or recovers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchError {
    /// Non-success status or transport failure — no finer taxonomy,
    /// the user only learns the identifier was not found.
    NotFound { ident: String },
    /// Success status but the body does not match the expected schema.
    Parse { ident: String, detail: String },
}

impl FetchError {
    pub fn not_found(ident: &str) -> Self {
        Self::NotFound { ident: s!(ident) }
    }

    /// The identifier as the user typed it.
    pub fn ident(&self) -> &str {
        match self {
            Self::NotFound { ident } | Self::Parse { ident, .. } => ident,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { ident } => write!(f, "Pokémon {ident} not found."),
            Self::Parse { ident, detail } => {
                write!(f, "Pokémon {ident}: unexpected API response ({detail})")
            }
        }
    }
}

impl Error for FetchError {}
