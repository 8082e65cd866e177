//! Entry points the host calls: once at startup, then every frame

use eframe::egui;
use tracing::info;

use crate::config::Store;
use crate::feature::FeatureRegistry;
use crate::gui::panel::Panel;
use crate::host::Host;

pub struct Plugin {
    registry: FeatureRegistry,
    panel: Panel,
    visible: bool,
}

impl Plugin {
    /// Load persisted state and bring up the feature catalog.
    pub fn initialize(store: Store, host: &mut dyn Host) -> Self {
        info!(config = %store.path().display(), "modpanel initializing");
        let mut registry = FeatureRegistry::new(store);
        registry.initialize(host);
        info!("Press F10 to toggle the panel");

        Self {
            registry,
            panel: Panel::new(),
            visible: false,
        }
    }

    pub fn registry(&self) -> &FeatureRegistry {
        &self.registry
    }

    #[cfg(test)]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            info!(panel = if visible { "SHOWN" } else { "HIDDEN" }, "Panel visibility changed");
        }
    }

    pub fn toggle_visibility(&mut self) {
        self.set_visible(!self.visible);
    }

    /// Per-frame tick of every enabled feature
    pub fn update(&mut self, host: &mut dyn Host) {
        self.registry.on_update(host);
    }

    /// Draw the panel if it is visible
    pub fn render(&mut self, ctx: &egui::Context, host: &mut dyn Host) {
        if !self.visible {
            return;
        }
        self.panel.render(ctx, &mut self.registry, host);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::SimHost;
    use tempfile::TempDir;

    #[test]
    fn test_toggle_visibility() {
        let dir = TempDir::new().unwrap();
        let mut host = SimHost::new();
        let mut plugin = Plugin::initialize(Store::new(dir.path().join("modpanel.cfg")), &mut host);

        assert!(!plugin.is_visible());
        plugin.toggle_visibility();
        assert!(plugin.is_visible());
        plugin.toggle_visibility();
        assert!(!plugin.is_visible());
    }

    #[test]
    fn test_restored_feature_runs_on_update() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("modpanel.cfg");
        std::fs::write(&path, "feature_Time_Scale_enabled=True\nfeature_Time_Scale_timeScale=3\n").unwrap();
        let mut host = SimHost::new();

        let mut plugin = Plugin::initialize(Store::new(&path), &mut host);
        host.advance(0.016);
        plugin.update(&mut host);

        assert_eq!(host.time_scale(), 3.0);
        assert!(plugin.registry().feature("Time Scale").unwrap().is_enabled());
    }

    #[test]
    fn test_hidden_panel_draws_nothing() {
        let dir = TempDir::new().unwrap();
        let mut host = SimHost::new();
        let mut plugin = Plugin::initialize(Store::new(dir.path().join("modpanel.cfg")), &mut host);
        let ctx = egui::Context::default();

        let output = ctx.run(egui::RawInput::default(), |ctx| plugin.render(ctx, &mut host));
        assert!(output.shapes.is_empty());
    }
}
