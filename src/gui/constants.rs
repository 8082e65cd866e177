//! GUI-specific constants for the demo window, panel colors and inputs

use egui;

/// Demo host window dimensions
pub const WINDOW_WIDTH: f32 = 960.0;
pub const WINDOW_HEIGHT: f32 = 640.0;
pub const WINDOW_MIN_WIDTH: f32 = 480.0;
pub const WINDOW_MIN_HEIGHT: f32 = 360.0;

/// Panel chrome colors
pub const PANEL_BACKGROUND: egui::Color32 = egui::Color32::BLACK;
pub const PANEL_TEXT: egui::Color32 = egui::Color32::WHITE;
pub const TAB_ACTIVE: egui::Color32 = egui::Color32::WHITE;
pub const TAB_INACTIVE: egui::Color32 = egui::Color32::GRAY;
pub const TAB_FILL: egui::Color32 = egui::Color32::BLACK;

/// Status colors
pub const STATUS_OK: egui::Color32 = egui::Color32::from_rgb(0, 200, 0);
pub const STATUS_MISSING: egui::Color32 = egui::Color32::from_rgb(200, 0, 0);
pub const STATUS_WARN: egui::Color32 = egui::Color32::from_rgb(200, 200, 0);

pub const TITLE_FONT_SIZE: f32 = 14.0;
pub const TAB_FONT_SIZE: f32 = 13.0;

/// Width of numeric text inputs inside feature regions
pub const INPUT_WIDTH: f32 = 80.0;

/// Demo scene
pub const SCENE_MARKER_RADIUS: f32 = 12.0;
pub const SCENE_MARKER_SPEED: f32 = 0.8;
