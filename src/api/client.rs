// src/api/client.rs
// One blocking GET per lookup. Identifier is lowercased into the URL
// path; any non-success status collapses to NotFound.

use std::time::Duration;

use reqwest::blocking::Client;

use super::model::{self, PokemonResponse};
use super::FetchError;

pub const API_BASE: &str = "https://pokeapi.co/api/v2";

/// Fetch seam: the GUI uses the live client; tests plug in stubs.
pub trait Lookup {
    fn fetch(&self, ident: &str) -> Result<PokemonResponse, FetchError>;
}

pub struct PokeApi {
    http: Client,
    base: String,
}

impl PokeApi {
    pub fn new() -> Self {
        Self::with_base(API_BASE)
    }

    /// Point at a different base URL (local fixture server etc.).
    pub fn with_base(base: &str) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(15))
            .user_agent("pokedex_compare/0.2")
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { http, base: s!(base) }
    }
}

impl Default for PokeApi {
    fn default() -> Self {
        Self::new()
    }
}

impl Lookup for PokeApi {
    fn fetch(&self, ident: &str) -> Result<PokemonResponse, FetchError> {
        let url = format!("{}/pokemon/{}", self.base, ident.to_lowercase());
        logd!("GET {}", url);

        let resp = self.http.get(&url).send().map_err(|e| {
            logd!("Fetch: transport error for {}: {}", ident, e);
            FetchError::not_found(ident)
        })?;

        let status = resp.status();
        if !status.is_success() {
            logd!("Fetch: HTTP {} for {}", status, ident);
            return Err(FetchError::not_found(ident));
        }

        let body = resp.text().map_err(|_| FetchError::not_found(ident))?;
        model::parse_response(&body, ident)
    }
}
