use eframe::egui;

use crate::feature::{Feature, GuiContext, Persisted};
use crate::gui::components::feature_checkbox;

const DETAIL_LINES: f32 = 4.0;
const LINE_HEIGHT: f32 = 20.0;

/// Read-only view of the host clock
#[derive(Default)]
pub struct FrameInspector {
    show_details: bool,
}

impl Feature for FrameInspector {
    fn name(&self) -> &'static str {
        "Frame Inspector"
    }

    fn load(&mut self, persisted: &Persisted<'_>) {
        self.show_details = persisted.get("showDetails", false);
    }

    fn on_gui(&mut self, ui: &mut egui::Ui, ctx: &mut GuiContext<'_>) {
        feature_checkbox(ui, ctx, self.name());
        if !ctx.enabled {
            return;
        }

        let host = ctx.host;
        ui.label(format!("Frame {}  at {:.1}s", host.frame_count(), host.time()));
        if ui.checkbox(&mut self.show_details, "Show details").changed() {
            ctx.persisted.set("showDetails", self.show_details);
        }
        if self.show_details {
            ui.label(format!("Delta: {:.2} ms", host.delta_time() * 1000.0));
            ui.label(format!("Unscaled delta: {:.2} ms", host.unscaled_delta_time() * 1000.0));
            ui.label(format!("Time scale: {:.2}x", host.time_scale()));
            ui.label(format!("Wall time: {:.1}s", host.unscaled_time()));
        }
    }

    fn dynamic_height(&self, enabled: bool) -> f32 {
        match (enabled, self.show_details) {
            (false, _) => 25.0,
            (true, false) => 70.0,
            (true, true) => 70.0 + DETAIL_LINES * LINE_HEIGHT,
        }
    }
}
