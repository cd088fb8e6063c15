// src/gui/mod.rs
pub mod actions;
pub mod app;
pub mod components;
pub mod progress;

use std::error::Error;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Pokémon Stat Comparison",
        options,
        Box::new(|cc| {
            // http + png loaders so sprite URLs render directly
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(app::App::new()))
        }),
    )?;
    Ok(())
}
