//! Application-wide constants
//!
//! Magic numbers and string literals used throughout the application,
//! providing a single source of truth for constant values.

/// Config file location and format
pub mod config {
    /// Directory under the platform config dir
    pub const APP_DIR: &str = "modpanel";

    /// Config file name
    pub const FILENAME: &str = "modpanel.cfg";

    /// Comment lines written at the top of every save (ignored on load)
    pub const HEADER_LINES: [&str; 2] = [
        "# modpanel configuration file",
        "# Generated automatically - do not edit manually",
    ];
}

/// Feature region sizing
pub mod feature {
    /// Checkbox row only
    pub const DISABLED_HEIGHT: f32 = 25.0;

    /// Checkbox plus one line of content
    pub const ENABLED_HEIGHT: f32 = 50.0;

    /// Vertical gap between stacked features
    pub const FEATURE_GAP: f32 = 10.0;

    /// Content height reported for a tab that has no feature group
    pub const DEFAULT_TAB_HEIGHT: f32 = 300.0;
}

/// Panel chrome geometry, relative to the panel origin
pub mod panel {
    /// Screen position of the panel's top-left corner
    pub const ORIGIN_X: f32 = 10.0;
    pub const ORIGIN_Y: f32 = 10.0;

    pub const WIDTH: f32 = 380.0;
    pub const MIN_HEIGHT: f32 = 200.0;

    /// Space above the content area (title + tab strip)
    pub const HEADER_ALLOWANCE: f32 = 85.0;

    /// Space below the content area
    pub const BOTTOM_PADDING: f32 = 20.0;

    pub const INSET: f32 = 5.0;
    pub const TITLE_WIDTH: f32 = 240.0;
    pub const TITLE_HEIGHT: f32 = 20.0;

    pub const TAB_STRIP_Y: f32 = 30.0;
    pub const TAB_WIDTH: f32 = 80.0;
    pub const TAB_HEIGHT: f32 = 35.0;

    pub const CONTENT_Y: f32 = 75.0;
    pub const CONTENT_WIDTH: f32 = 350.0;

    pub const TITLE: &str = concat!("modpanel v", env!("CARGO_PKG_VERSION"));
}

/// Host-level input
pub mod hotkey {
    /// Key that flips panel visibility
    pub const TOGGLE_PANEL: egui::Key = egui::Key::F10;
}
