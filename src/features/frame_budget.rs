use anyhow::Result;
use eframe::egui;
use tracing::warn;

use crate::feature::{Feature, GuiContext, Persisted};
use crate::gui::components::{feature_checkbox, positive_float_field, positive_or};
use crate::gui::constants::{STATUS_OK, STATUS_WARN};
use crate::host::Host;

const DEFAULT_BUDGET_MS: f32 = 50.0;

/// Counts frames whose wall time exceeds a budget
pub struct FrameBudget {
    budget_ms: f32,
    budget_text: String,
    slow_frames: u32,
    worst_ms: f32,
}

impl Default for FrameBudget {
    fn default() -> Self {
        Self {
            budget_ms: DEFAULT_BUDGET_MS,
            budget_text: DEFAULT_BUDGET_MS.to_string(),
            slow_frames: 0,
            worst_ms: 0.0,
        }
    }
}

impl FrameBudget {
    /// Record one frame; true when it was over budget
    fn record(&mut self, frame_ms: f32) -> bool {
        self.worst_ms = self.worst_ms.max(frame_ms);
        if frame_ms > self.budget_ms {
            self.slow_frames += 1;
            return true;
        }
        false
    }
}

impl Feature for FrameBudget {
    fn name(&self) -> &'static str {
        "Frame Budget"
    }

    fn load(&mut self, persisted: &Persisted<'_>) {
        self.budget_ms = positive_or(persisted.get("budgetMs", DEFAULT_BUDGET_MS), DEFAULT_BUDGET_MS);
        self.budget_text = self.budget_ms.to_string();
    }

    fn on_enable(&mut self, _host: &mut dyn Host) -> Result<()> {
        self.slow_frames = 0;
        self.worst_ms = 0.0;
        Ok(())
    }

    fn on_update(&mut self, host: &mut dyn Host) -> Result<()> {
        let frame_ms = host.unscaled_delta_time() * 1000.0;
        if self.record(frame_ms) {
            warn!(frame = host.frame_count(), frame_ms, budget_ms = self.budget_ms, "Frame over budget");
        }
        Ok(())
    }

    fn on_gui(&mut self, ui: &mut egui::Ui, ctx: &mut GuiContext<'_>) {
        feature_checkbox(ui, ctx, self.name());
        if !ctx.enabled {
            return;
        }

        if let Some(budget) = positive_float_field(ui, "Budget (ms):", &mut self.budget_text) {
            self.budget_ms = budget;
            ctx.persisted.set("budgetMs", budget);
        }
        let color = if self.slow_frames == 0 { STATUS_OK } else { STATUS_WARN };
        ui.colored_label(
            color,
            format!("Slow frames: {} (worst {:.1} ms)", self.slow_frames, self.worst_ms),
        );
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
    fn test_counts_slow_frames() {
        let mut host = SimHost::new();
        let mut budget = FrameBudget::default();
        budget.on_enable(&mut host).unwrap();

        for dt in [0.016, 0.080, 0.020, 0.120] {
            host.advance(dt);
            budget.on_update(&mut host).unwrap();
        }

        assert_eq!(budget.slow_frames, 2);
        assert!((budget.worst_ms - 120.0).abs() < 0.01);
    }

    #[test]
    fn test_enable_resets_counters() {
        let mut host = SimHost::new();
        let mut budget = FrameBudget::default();
        budget.record(500.0);

        budget.on_enable(&mut host).unwrap();
        assert_eq!(budget.slow_frames, 0);
        assert_eq!(budget.worst_ms, 0.0);
    }

    #[test]
    fn test_invalid_persisted_budget_uses_default() {
        let mut store = Store::new("modpanel.cfg");
        let mut budget = FrameBudget::default();

        for bad in [-1.0f32, 0.0, f32::NAN] {
            store.set("feature_Frame_Budget_budgetMs", bad);
            budget.load(&Persisted::new(&mut store, "Frame_Budget", false));
            assert_eq!(budget.budget_ms, DEFAULT_BUDGET_MS);
        }

        store.set("feature_Frame_Budget_budgetMs", 33.0f32);
        budget.load(&Persisted::new(&mut store, "Frame_Budget", false));
        assert_eq!(budget.budget_ms, 33.0);
        assert!(!budget.record(20.0));
    }
}
