use anyhow::Result;
use eframe::egui;
use tracing::{debug, info, warn};

use crate::feature::{Feature, GuiContext, Persisted};
use crate::gui::components::{feature_checkbox, positive_float_field, positive_or, status_line};
use crate::host::Host;

const DEFAULT_ZOOM: f32 = 1.25;
const MIN_ZOOM: f32 = 0.5;
const MAX_ZOOM: f32 = 3.0;

/// Overrides the host's UI zoom while enabled
pub struct UiScale {
    zoom: f32,
    zoom_text: String,
    original_zoom: Option<f32>,
    available: bool,
}

impl Default for UiScale {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            zoom_text: DEFAULT_ZOOM.to_string(),
            original_zoom: None,
            available: true,
        }
    }
}

impl UiScale {
    fn target_zoom(&self) -> f32 {
        self.zoom.clamp(MIN_ZOOM, MAX_ZOOM)
    }
}

impl Feature for UiScale {
    fn name(&self) -> &'static str {
        "UI Scale"
    }

    fn load(&mut self, persisted: &Persisted<'_>) {
        self.zoom = positive_or(persisted.get("zoom", DEFAULT_ZOOM), DEFAULT_ZOOM);
        self.zoom_text = self.zoom.to_string();
    }

    fn on_enable(&mut self, host: &mut dyn Host) -> Result<()> {
        self.original_zoom = host.ui_zoom();
        Ok(())
    }

    fn on_disable(&mut self, host: &mut dyn Host) -> Result<()> {
        if let Some(original) = self.original_zoom.take() {
            host.set_ui_zoom(original);
            info!(zoom = original, "UI zoom restored");
        }
        Ok(())
    }

    fn on_update(&mut self, host: &mut dyn Host) -> Result<()> {
        let Some(current) = host.ui_zoom() else {
            if self.available {
                warn!("Host has no UI zoom, skipping");
            }
            self.available = false;
            return Ok(());
        };
        self.available = true;

        // host gained zoom after we were enabled
        if self.original_zoom.is_none() {
            self.original_zoom = Some(current);
        }

        let target = self.target_zoom();
        if (current - target).abs() > f32::EPSILON {
            host.set_ui_zoom(target);
            debug!(zoom = target, "UI zoom applied");
        }
        Ok(())
    }

    fn on_gui(&mut self, ui: &mut egui::Ui, ctx: &mut GuiContext<'_>) {
        feature_checkbox(ui, ctx, self.name());
        if !ctx.enabled {
            return;
        }

        if let Some(zoom) = positive_float_field(ui, "Zoom factor:", &mut self.zoom_text) {
            self.zoom = zoom;
            ctx.persisted.set("zoom", zoom);
        }
        match ctx.host.ui_zoom() {
            Some(current) => status_line(ui, true, &format!("Current: {current:.2}x")),
            None => status_line(ui, false, "Zoom not available"),
        }
    }

    fn dynamic_height(&self, enabled: bool) -> f32 {
        if enabled { 90.0 } else { 25.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Store;
    use crate::host::SimHost;

    #[test]
    fn test_applies_and_restores_zoom() {
        let mut host = SimHost::new();
        host.set_ui_zoom(1.1);
        let mut feature = UiScale::default();

        feature.on_enable(&mut host).unwrap();
        feature.on_update(&mut host).unwrap();
        assert_eq!(host.ui_zoom(), Some(DEFAULT_ZOOM));

        feature.on_disable(&mut host).unwrap();
        assert_eq!(host.ui_zoom(), Some(1.1));
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut host = SimHost::new();
        let mut feature = UiScale {
            zoom: 10.0,
            ..UiScale::default()
        };
        feature.on_enable(&mut host).unwrap();
        feature.on_update(&mut host).unwrap();
        assert_eq!(host.ui_zoom(), Some(MAX_ZOOM));
    }

    #[test]
    fn test_missing_zoom_is_skipped() {
        let mut host = SimHost::without_zoom();
        let mut feature = UiScale::default();

        feature.on_enable(&mut host).unwrap();
        assert!(feature.on_update(&mut host).is_ok());
        assert!(!feature.available);
        assert!(feature.on_disable(&mut host).is_ok());
        assert_eq!(host.ui_zoom(), None);
    }

    #[test]
    fn test_invalid_persisted_zoom_uses_default() {
        let mut store = Store::new("modpanel.cfg");
        store.set("feature_UI_Scale_zoom", -2.0f32);
        let mut feature = UiScale::default();
        feature.load(&Persisted::new(&mut store, "UI_Scale", false));
        assert_eq!(feature.zoom, DEFAULT_ZOOM);

        let mut host = SimHost::new();
        feature.on_enable(&mut host).unwrap();
        feature.on_update(&mut host).unwrap();
        assert_eq!(host.ui_zoom(), Some(DEFAULT_ZOOM));
    }
}
