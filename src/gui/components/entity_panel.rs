// src/gui/components/entity_panel.rs
//
// Result columns: sprite, name, and "Stat: value" lines per entity.
// Also owns the empty state shown when fewer than two resolved, and
// the inline per-identifier error messages.

use eframe::egui;

use crate::data::{capitalize, Entity, MIN_COMPARE};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    for err in &app.errors {
        ui.colored_label(egui::Color32::from_rgb(200, 60, 60), err.as_str());
    }

    if app.entities.len() < MIN_COMPARE {
        ui.label("Please enter at least two valid Pokémon names or IDs in the sidebar.");
        return;
    }

    ui.heading(format!("Comparing {}", join_names(&app.entities)));
    ui.add_space(4.0);

    ui.columns(app.entities.len(), |cols| {
        for (col, e) in cols.iter_mut().zip(&app.entities) {
            if let Some(url) = &e.sprite_url {
                col.add(
                    egui::Image::new(url.as_str())
                        .fit_to_exact_size(egui::vec2(96.0, 96.0)),
                );
            }
            col.strong(e.name.as_str());
            col.label("Stats:");
            for (stat, value) in &e.stats {
                col.label(format!("{}: {}", capitalize(stat), value));
            }
        }
    });
}

/// "A and B", "A, B and C"
fn join_names(entities: &[Entity]) -> String {
    let names: Vec<&str> = entities.iter().map(|e| e.name.as_str()).collect();
    match names.len() {
        0 => s!(),
        1 => s!(names[0]),
        n => format!("{} and {}", names[..n - 1].join(", "), names[n - 1]),
    }
}
