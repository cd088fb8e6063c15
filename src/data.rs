// src/data.rs
//
// Resolved view of one Pokémon: display name, sprite URL, and the
// ordered stat vector the chart is built from. Derived once per fetch,
// discarded at the end of each render cycle — nothing is persisted.

use crate::api::model::PokemonResponse;

/// Chart needs at least two entities to compare.
pub const MIN_COMPARE: usize = 2;
/// Input slots in the GUI; also the palette size.
pub const MAX_COMPARE: usize = 4;

/// Ordered stat name → base stat. Order is the API's; all vectors in
/// one comparison must share the same ordered key set.
pub type StatVector = Vec<(String, u32)>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    /// Display name, capitalized.
    pub name: String,
    pub sprite_url: Option<String>,
    pub stats: StatVector,
}

impl Entity {
    pub fn from_response(rec: PokemonResponse) -> Self {
        let stats = rec
            .stats
            .into_iter()
            .map(|s| (s.stat.name, s.base_stat))
            .collect();
        Self {
            name: capitalize(&rec.name),
            sprite_url: rec.sprites.front_default,
            stats,
        }
    }
}

/// "pikachu" → "Pikachu", "special-attack" → "Special-attack"
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => s!(),
    }
}
