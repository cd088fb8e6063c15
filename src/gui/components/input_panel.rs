// src/gui/components/input_panel.rs
//
// Left panel: one text field per comparison slot, the Compare button,
// and the status line the progress sink writes into.

use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Pokémon");
    ui.label("Name or Pokédex number. At least two.");

    ui.separator();

    for (i, input) in app.inputs.iter_mut().enumerate() {
        ui.label(format!("Pokémon {}", i + 1));
        ui.text_edit_singleline(input);
    }

    ui.separator();

    if ui.button("Compare").clicked() {
        actions::compare(app);
    }

    ui.separator();

    let status = app.status.lock().unwrap().clone();
    ui.label(status);
}
