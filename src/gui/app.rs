// src/gui/app.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::api::client::PokeApi;
use crate::data::{Entity, MAX_COMPARE};
use crate::radar::RadarPolygon;

use super::components;

pub struct App {
    // text field per comparison slot (UI thread only)
    pub inputs: [String; MAX_COMPARE],

    // results of the last compare
    pub entities: Vec<Entity>,
    pub errors: Vec<String>,
    pub polygons: Vec<RadarPolygon>,

    // status line (progress sink writes here)
    pub status: Arc<Mutex<String>>,

    pub api: PokeApi,
}

impl App {
    pub fn new() -> Self {
        let mut inputs: [String; MAX_COMPARE] = Default::default();
        inputs[0] = s!("pikachu");
        inputs[1] = s!("charizard");

        logf!("Init: slots={}", MAX_COMPARE);

        Self {
            inputs,
            entities: Vec::new(),
            errors: Vec::new(),
            polygons: Vec::new(),
            status: Arc::new(Mutex::new(s!("Idle"))),
            api: PokeApi::new(),
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("inputs")
            .resizable(false)
            .show(ctx, |ui| {
                components::input_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                components::entity_panel::draw(ui, self);

                ui.separator();

                components::radar_chart::draw(ui, self);
            });
        });
    }
}
