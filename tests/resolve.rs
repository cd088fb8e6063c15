// tests/resolve.rs
//
// Resolution behavior with a stub Lookup standing in for the live API.
//
use pokedex_compare::api::client::Lookup;
use pokedex_compare::api::model::{PokemonResponse, Sprites, StatEntry, StatRef};
use pokedex_compare::api::FetchError;
use pokedex_compare::progress::Progress;
use pokedex_compare::radar::PALETTE;
use pokedex_compare::runner::resolve_all;

fn record(name: &str, stats: &[(&str, u32)]) -> PokemonResponse {
    PokemonResponse {
        name: name.to_string(),
        sprites: Sprites {
            front_default: Some(format!("https://sprites.test/{name}.png")),
        },
        stats: stats
            .iter()
            .map(|(k, v)| StatEntry {
                base_stat: *v,
                stat: StatRef { name: k.to_string() },
            })
            .collect(),
    }
}

struct StubLookup;
impl Lookup for StubLookup {
    fn fetch(&self, ident: &str) -> Result<PokemonResponse, FetchError> {
        match ident {
            "pikachu" => Ok(record("pikachu", &[("hp", 35), ("attack", 55), ("defense", 40)])),
            "charizard" => Ok(record("charizard", &[("hp", 78), ("attack", 84), ("defense", 78)])),
            "bulbasaur" => Ok(record("bulbasaur", &[("hp", 45), ("attack", 49), ("defense", 49)])),
            "squirtle" => Ok(record("squirtle", &[("hp", 44), ("attack", 48), ("defense", 65)])),
            other => Err(FetchError::not_found(other)),
        }
    }
}

fn idents(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn failed_lookup_is_excluded_not_fatal() {
    let res = resolve_all(&StubLookup, &idents(&["pikachu", "missingno"]), None);

    assert_eq!(res.entities.len(), 1);
    assert_eq!(res.entities[0].name, "Pikachu"); // capitalized for display
    assert_eq!(res.errors.len(), 1);
    assert_eq!(res.errors[0].ident(), "missingno");
}

#[test]
fn blank_inputs_are_skipped() {
    let res = resolve_all(&StubLookup, &idents(&["pikachu", "", "   ", "charizard"]), None);

    assert_eq!(res.entities.len(), 2);
    assert!(res.errors.is_empty());
}

#[test]
fn one_of_two_resolved_means_no_chart() {
    let res = resolve_all(&StubLookup, &idents(&["pikachu", "missingno"]), None);
    assert!(res.chart().is_none());
}

#[test]
fn two_resolved_builds_a_chart() {
    let res = resolve_all(&StubLookup, &idents(&["pikachu", "charizard"]), None);

    let polys = res.chart().expect("chart gate should open").unwrap();
    assert_eq!(polys.len(), 2);
    assert_eq!(polys[0].label, "Pikachu");
    assert_eq!(polys[1].label, "Charizard");
}

#[test]
fn four_resolved_yield_four_polygons_in_palette_order() {
    let res = resolve_all(
        &StubLookup,
        &idents(&["pikachu", "charizard", "bulbasaur", "squirtle"]),
        None,
    );

    let polys = res.chart().expect("chart gate should open").unwrap();
    assert_eq!(polys.len(), 4);
    for (i, p) in polys.iter().enumerate() {
        assert_eq!(p.color, PALETTE[i]);
    }
}

#[test]
fn entity_order_follows_input_order() {
    let res = resolve_all(&StubLookup, &idents(&["charizard", "pikachu"]), None);
    assert_eq!(res.entities[0].name, "Charizard");
    assert_eq!(res.entities[1].name, "Pikachu");
}

/* ---------- progress reporting ---------- */

#[derive(Default)]
struct RecordingProgress {
    began: Option<usize>,
    items: Vec<String>,
    finished: bool,
}

impl Progress for RecordingProgress {
    fn begin(&mut self, total: usize) {
        self.began = Some(total);
    }
    fn item_done(&mut self, ident: &str) {
        self.items.push(ident.to_string());
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}

#[test]
fn progress_sees_every_nonblank_identifier() {
    let mut prog = RecordingProgress::default();
    resolve_all(
        &StubLookup,
        &idents(&["pikachu", "", "missingno"]),
        Some(&mut prog),
    );

    assert_eq!(prog.began, Some(2));
    assert_eq!(prog.items, vec!["pikachu", "missingno"]);
    assert!(prog.finished);
}
