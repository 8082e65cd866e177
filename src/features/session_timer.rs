use anyhow::Result;
use eframe::egui;
use tracing::info;

use crate::feature::{Feature, GuiContext, Persisted};
use crate::gui::components::feature_checkbox;
use crate::host::Host;

const DEFAULT_INTERVAL_MINUTES: u32 = 30;
const MAX_INTERVAL_MINUTES: u32 = 240;

/// Logs a break reminder every interval of wall-clock time
pub struct SessionTimer {
    interval_minutes: u32,
    elapsed: f32,
    since_reminder: f32,
    reminders: u32,
}

impl Default for SessionTimer {
    fn default() -> Self {
        Self {
            interval_minutes: DEFAULT_INTERVAL_MINUTES,
            elapsed: 0.0,
            since_reminder: 0.0,
            reminders: 0,
        }
    }
}

impl SessionTimer {
    fn interval_secs(&self) -> f32 {
        self.interval_minutes.max(1) as f32 * 60.0
    }

    /// Advance by `dt` seconds; true when a reminder is due this frame
    fn tick(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        self.since_reminder += dt;
        if self.since_reminder >= self.interval_secs() {
            self.since_reminder = 0.0;
            self.reminders += 1;
            return true;
        }
        false
    }
}

fn format_clock(secs: f32) -> String {
    let total = secs.max(0.0) as u64;
    format!("{:02}:{:02}:{:02}", total / 3600, (total / 60) % 60, total % 60)
}

impl Feature for SessionTimer {
    fn name(&self) -> &'static str {
        "Session Timer"
    }

    fn load(&mut self, persisted: &Persisted<'_>) {
        self.interval_minutes = persisted
            .get("intervalMinutes", DEFAULT_INTERVAL_MINUTES)
            .clamp(1, MAX_INTERVAL_MINUTES);
    }

    fn on_enable(&mut self, _host: &mut dyn Host) -> Result<()> {
        self.elapsed = 0.0;
        self.since_reminder = 0.0;
        self.reminders = 0;
        Ok(())
    }

    fn on_update(&mut self, host: &mut dyn Host) -> Result<()> {
        if self.tick(host.unscaled_delta_time()) {
            info!(
                elapsed = %format_clock(self.elapsed),
                reminders = self.reminders,
                "Session reminder: time for a break"
            );
        }
        Ok(())
    }

    fn on_gui(&mut self, ui: &mut egui::Ui, ctx: &mut GuiContext<'_>) {
        feature_checkbox(ui, ctx, self.name());
        if !ctx.enabled {
            return;
        }

        ui.label(format!("Elapsed: {}", format_clock(self.elapsed)));
        ui.horizontal(|ui| {
            ui.label("Remind every:");
            let drag = egui::DragValue::new(&mut self.interval_minutes)
                .range(1..=MAX_INTERVAL_MINUTES)
                .suffix(" min");
            if ui.add(drag).changed() {
                ctx.persisted.set("intervalMinutes", self.interval_minutes);
            }
        });
        ui.label(format!("Reminders: {}", self.reminders));
    }

    fn dynamic_height(&self, enabled: bool) -> f32 {
        if enabled { 90.0 } else { 25.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::SimHost;

    #[test]
    fn test_reminder_fires_once_per_interval() {
        let mut timer = SessionTimer {
            interval_minutes: 1,
            ..SessionTimer::default()
        };

        let mut fired = 0;
        for _ in 0..150 {
            if timer.tick(1.0) {
                fired += 1;
            }
        }
        assert_eq!(fired, 2);
        assert_eq!(timer.reminders, 2);
        assert_eq!(timer.elapsed, 150.0);
    }

    #[test]
    fn test_uses_unscaled_time() {
        let mut host = SimHost::new();
        host.set_time_scale(10.0);
        let mut timer = SessionTimer::default();
        timer.on_enable(&mut host).unwrap();

        host.advance(2.0);
        timer.on_update(&mut host).unwrap();
        assert_eq!(timer.elapsed, 2.0);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0.0), "00:00:00");
        assert_eq!(format_clock(3725.9), "01:02:05");
    }
}
