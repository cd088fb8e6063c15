// src/runner.rs
//
// Top-level orchestration: resolve identifiers through a Lookup,
// sequentially and blocking, and partition the results. Explicit
// function of its inputs — no hidden session state between runs.

use std::error::Error;

use crate::api::client::Lookup;
use crate::api::FetchError;
use crate::data::{Entity, MIN_COMPARE};
use crate::progress::Progress;
use crate::radar::{self, RadarPolygon};

/// Outcome of one resolve pass, in input order on both sides.
pub struct Resolution {
    pub entities: Vec<Entity>,
    pub errors: Vec<FetchError>,
}

impl Resolution {
    /// Chart gate: geometry is only built once at least MIN_COMPARE
    /// entities resolved; below that the caller shows a prompt instead.
    pub fn chart(&self) -> Option<Result<Vec<RadarPolygon>, Box<dyn Error>>> {
        if self.entities.len() < MIN_COMPARE {
            return None;
        }
        Some(radar::build_polygons(&self.entities))
    }
}

/// Resolve every non-blank identifier. Failed lookups are excluded and
/// collected as errors; nothing here returns early or panics.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn resolve_all(
    lookup: &dyn Lookup,
    idents: &[String],
    mut progress: Option<&mut dyn Progress>,
) -> Resolution {
    let wanted: Vec<&str> = idents
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(wanted.len());
    }

    let mut entities = Vec::with_capacity(wanted.len());
    let mut errors = Vec::new();

    for ident in wanted {
        match lookup.fetch(ident) {
            Ok(rec) => {
                logf!("Fetch: OK {} (stats={})", ident, rec.stats.len());
                entities.push(Entity::from_response(rec));
            }
            Err(e) => {
                loge!("Fetch: {}", e);
                errors.push(e);
            }
        }
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(ident);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Resolution { entities, errors }
}
