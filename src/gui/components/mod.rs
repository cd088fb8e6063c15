// src/gui/components/mod.rs
pub mod entity_panel;
pub mod input_panel;
pub mod radar_chart;
