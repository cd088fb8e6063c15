// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod api;
pub mod data;
pub mod gui;
pub mod progress;
pub mod radar;
pub mod runner;
