use anyhow::Result;
use eframe::egui;
use tracing::{debug, info};

use crate::feature::{Feature, GuiContext, Persisted};
use crate::gui::components::{feature_checkbox, positive_float_field, positive_or};
use crate::host::Host;

const DEFAULT_SCALE: f32 = 2.0;

/// Runs the host clock faster or slower while enabled
pub struct TimeScale {
    scale: f32,
    scale_text: String,
    original_scale: f32,
}

impl Default for TimeScale {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            scale_text: DEFAULT_SCALE.to_string(),
            original_scale: 1.0,
        }
    }
}

impl Feature for TimeScale {
    fn name(&self) -> &'static str {
        "Time Scale"
    }

    fn load(&mut self, persisted: &Persisted<'_>) {
        self.scale = positive_or(persisted.get("timeScale", DEFAULT_SCALE), DEFAULT_SCALE);
        self.scale_text = self.scale.to_string();
    }

    fn on_enable(&mut self, host: &mut dyn Host) -> Result<()> {
        self.original_scale = host.time_scale();
        Ok(())
    }

    fn on_disable(&mut self, host: &mut dyn Host) -> Result<()> {
        host.set_time_scale(self.original_scale);
        info!(scale = self.original_scale, "Time scale restored");
        Ok(())
    }

    fn on_update(&mut self, host: &mut dyn Host) -> Result<()> {
        if host.time_scale() != self.scale {
            host.set_time_scale(self.scale);
            debug!(scale = self.scale, "Time scale set");
        }
        Ok(())
    }

    fn on_gui(&mut self, ui: &mut egui::Ui, ctx: &mut GuiContext<'_>) {
        feature_checkbox(ui, ctx, self.name());
        if !ctx.enabled {
            return;
        }

        if let Some(scale) = positive_float_field(ui, "Time multiplier:", &mut self.scale_text) {
            self.scale = scale;
            ctx.persisted.set("timeScale", scale);
        }
        ui.label(format!("Current: {:.1}x", ctx.host.time_scale()));
    }

    fn dynamic_height(&self, enabled: bool) -> f32 {
        // checkbox + label + field + readout
        if enabled { 90.0 } else { 25.0 }
    }
}
