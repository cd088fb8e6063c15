// src/gui/actions.rs
use crate::runner;

use super::app::App;
use super::progress::GuiProgress;

pub const NEED_TWO_PROMPT: &str = "Please enter at least two valid Pokémon names or IDs.";

/// Resolve the current inputs and rebuild the chart geometry.
/// Fetches are sequential and blocking; the status line tracks them.
pub fn compare(app: &mut App) {
    logf!("Compare: begin inputs={:?}", app.inputs);

    let mut prog = GuiProgress::new(app.status.clone());
    let res = runner::resolve_all(&app.api, &app.inputs, Some(&mut prog));

    app.errors = res.errors.iter().map(|e| e.to_string()).collect();

    match res.chart() {
        None => {
            logf!("Compare: only {} resolved, no chart", res.entities.len());
            app.polygons.clear();
            app.status(NEED_TWO_PROMPT);
        }
        Some(Ok(polys)) => {
            logf!("Compare: OK entities={} polygons={}", res.entities.len(), polys.len());
            app.polygons = polys;
            app.status("Ready");
        }
        Some(Err(e)) => {
            loge!("Compare: geometry error: {}", e);
            app.polygons.clear();
            app.status(format!("Error: {e}"));
        }
    }

    app.entities = res.entities;
}
