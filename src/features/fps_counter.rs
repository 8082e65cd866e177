use std::collections::VecDeque;

use anyhow::Result;
use eframe::egui;

use crate::feature::{Feature, GuiContext, Persisted};
use crate::gui::components::feature_checkbox;
use crate::host::Host;

const DEFAULT_WINDOW: u32 = 60;
const MAX_WINDOW: u32 = 600;

/// Rolling average of unscaled frame times
pub struct FpsCounter {
    window: u32,
    samples: VecDeque<f32>,
    total: f32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            samples: VecDeque::new(),
            total: 0.0,
        }
    }
}

impl FpsCounter {
    fn push(&mut self, dt: f32) {
        self.samples.push_back(dt);
        self.total += dt;
        self.trim();
    }

    fn trim(&mut self) {
        while self.samples.len() > self.window as usize {
            if let Some(old) = self.samples.pop_front() {
                self.total -= old;
            }
        }
    }

    fn fps(&self) -> Option<f32> {
        (self.total > 0.0).then(|| self.samples.len() as f32 / self.total)
    }
}

impl Feature for FpsCounter {
    fn name(&self) -> &'static str {
        "FPS Counter"
    }

    fn load(&mut self, persisted: &Persisted<'_>) {
        self.window = persisted.get("window", DEFAULT_WINDOW).clamp(1, MAX_WINDOW);
    }

    fn on_enable(&mut self, _host: &mut dyn Host) -> Result<()> {
        self.samples.clear();
        self.total = 0.0;
        Ok(())
    }

    fn on_update(&mut self, host: &mut dyn Host) -> Result<()> {
        self.push(host.unscaled_delta_time());
        Ok(())
    }

    fn on_gui(&mut self, ui: &mut egui::Ui, ctx: &mut GuiContext<'_>) {
        feature_checkbox(ui, ctx, self.name());
        if !ctx.enabled {
            return;
        }

        match self.fps() {
            Some(fps) => ui.label(format!("FPS: {fps:.1}")),
            None => ui.label("FPS: --"),
        };
        ui.horizontal(|ui| {
            ui.label("Window:");
            let drag = egui::DragValue::new(&mut self.window)
                .range(1..=MAX_WINDOW)
                .suffix(" frames");
            if ui.add(drag).changed() {
                self.trim();
                ctx.persisted.set("window", self.window);
            }
        });
    }

    fn dynamic_height(&self, enabled: bool) -> f32 {
        if enabled { 70.0 } else { 25.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_average() {
        let mut counter = FpsCounter::default();
        assert_eq!(counter.fps(), None);

        for _ in 0..4 {
            counter.push(0.25);
        }
        assert_eq!(counter.fps(), Some(4.0));
    }

    #[test]
    fn test_window_drops_old_samples() {
        let mut counter = FpsCounter {
            window: 2,
            ..FpsCounter::default()
        };
        counter.push(1.0);
        counter.push(0.5);
        counter.push(0.5);

        assert_eq!(counter.samples.len(), 2);
        assert_eq!(counter.fps(), Some(2.0));
    }
}
