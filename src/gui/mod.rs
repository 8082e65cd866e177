//! egui front end: the feature panel and the demo host window

pub mod components;
pub mod constants;
pub mod manager;
pub mod panel;

pub use manager::run_gui;
