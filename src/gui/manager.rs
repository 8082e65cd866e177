//! Demo host implemented with egui/eframe
//!
//! Owns the simulated host clock, forwards the panel hotkey, and calls the
//! plugin entry points once per frame over a small animated scene.

use std::time::Instant;

use anyhow::{Result, anyhow};
use eframe::{CreationContext, NativeOptions, egui};
use tracing::info;

use super::constants::*;
use crate::config::Store;
use crate::constants::hotkey::TOGGLE_PANEL;
use crate::host::{Host, SimHost};
use crate::plugin::Plugin;

struct HostApp {
    plugin: Plugin,
    host: SimHost,
    last_frame: Instant,
}

impl HostApp {
    fn new(cc: &CreationContext<'_>, store: Store, show_panel: bool) -> Self {
        info!("Initializing egui host");

        let mut host = SimHost::new();
        host.set_ui_zoom(cc.egui_ctx.zoom_factor());

        let mut plugin = Plugin::initialize(store, &mut host);
        plugin.set_visible(show_panel);

        Self {
            plugin,
            host,
            last_frame: Instant::now(),
        }
    }

    fn apply_zoom(&self, ctx: &egui::Context) {
        if let Some(zoom) = self.host.ui_zoom()
            && (ctx.zoom_factor() - zoom).abs() > f32::EPSILON
        {
            ctx.set_zoom_factor(zoom);
        }
    }

    fn draw_scene(&self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let rect = ui.max_rect();
            let span = (rect.width() - 2.0 * SCENE_MARKER_RADIUS).max(1.0);
            // ping-pong along the bottom edge, driven by scaled host time
            let phase = (self.host.time() as f32 * SCENE_MARKER_SPEED).rem_euclid(2.0);
            let t = if phase > 1.0 { 2.0 - phase } else { phase };
            let center = egui::pos2(
                rect.left() + SCENE_MARKER_RADIUS + t * span,
                rect.bottom() - 3.0 * SCENE_MARKER_RADIUS,
            );
            ui.painter().circle_filled(center, SCENE_MARKER_RADIUS, STATUS_OK);

            ui.with_layout(egui::Layout::bottom_up(egui::Align::RIGHT), |ui| {
                ui.label(format!(
                    "F10: toggle panel  |  time {:.1}s  |  scale {:.2}x",
                    self.host.time(),
                    self.host.time_scale()
                ));
            });
        });
    }
}

impl eframe::App for HostApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.host.advance(now.duration_since(self.last_frame).as_secs_f32());
        self.last_frame = now;

        if ctx.input(|i| i.key_pressed(TOGGLE_PANEL)) {
            self.plugin.toggle_visibility();
        }

        self.plugin.update(&mut self.host);
        self.apply_zoom(ctx);

        self.draw_scene(ctx);
        self.plugin.render(ctx, &mut self.host);
        // features may have changed the zoom while drawing
        self.apply_zoom(ctx);

        ctx.request_repaint();
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        let enabled = self
            .plugin
            .registry()
            .groups()
            .iter()
            .flat_map(|g| g.features.iter())
            .filter(|f| f.is_enabled())
            .count();
        info!(frames = self.host.frame_count(), enabled, "Host exiting");
    }
}

pub fn run_gui(store: Store, show_panel: bool) -> Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
            .with_title("modpanel demo host"),
        ..Default::default()
    };

    eframe::run_native(
        "modpanel",
        options,
        Box::new(move |cc| Ok(Box::new(HostApp::new(cc, store, show_panel)))),
    )
    .map_err(|err| anyhow!("Failed to launch egui host: {err}"))
}
