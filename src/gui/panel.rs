//! On-screen panel: background, title, tab strip and the active tab's
//! feature regions
//!
//! The panel is resized every frame from the registry's content height, so
//! features that grow when toggled push the panel down with them.

use eframe::egui;

use crate::constants::panel::*;
use crate::feature::{FeatureRegistry, Tab};
use crate::gui::constants::*;
use crate::host::Host;

/// Screen rectangles for one frame of the panel
#[derive(Debug, Clone, PartialEq)]
pub struct PanelLayout {
    pub frame: egui::Rect,
    pub title: egui::Rect,
    pub tabs: Vec<egui::Rect>,
    pub content: egui::Rect,
}

pub fn panel_height(content_height: f32) -> f32 {
    (HEADER_ALLOWANCE + content_height + BOTTOM_PADDING).max(MIN_HEIGHT)
}

impl PanelLayout {
    pub fn compute(origin: egui::Pos2, tab_count: usize, content_height: f32) -> Self {
        let at = |x: f32, y: f32, w: f32, h: f32| {
            egui::Rect::from_min_size(origin + egui::vec2(x, y), egui::vec2(w, h))
        };

        let tabs = (0..tab_count)
            .map(|i| at(INSET + i as f32 * TAB_WIDTH, TAB_STRIP_Y, TAB_WIDTH, TAB_HEIGHT))
            .collect();

        Self {
            frame: at(0.0, 0.0, WIDTH, panel_height(content_height)),
            title: at(INSET, INSET, TITLE_WIDTH, TITLE_HEIGHT),
            tabs,
            content: at(INSET, CONTENT_Y, CONTENT_WIDTH, content_height),
        }
    }
}

pub struct Panel {
    active_tab: Tab,
}

impl Default for Panel {
    fn default() -> Self {
        Self {
            active_tab: Tab::ALL[0],
        }
    }
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    #[cfg(test)]
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Current layout for the active tab
    pub fn layout(&self, registry: &FeatureRegistry) -> PanelLayout {
        let content_height = registry.group_content_height(self.active_tab);
        PanelLayout::compute(egui::pos2(ORIGIN_X, ORIGIN_Y), Tab::ALL.len(), content_height)
    }

    pub fn render(&mut self, ctx: &egui::Context, registry: &mut FeatureRegistry, host: &mut dyn Host) {
        let layout = self.layout(registry);

        egui::Area::new(egui::Id::new("modpanel"))
            .fixed_pos(layout.frame.min)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                // reserve the whole frame so the area sizes to it
                ui.allocate_rect(layout.frame, egui::Sense::hover());

                let painter = ui.painter();
                painter.rect_filled(layout.frame, egui::CornerRadius::ZERO, PANEL_BACKGROUND);
                painter.text(
                    layout.title.left_top(),
                    egui::Align2::LEFT_TOP,
                    TITLE,
                    egui::FontId::proportional(TITLE_FONT_SIZE),
                    PANEL_TEXT,
                );

                self.draw_tabs(ui, &layout.tabs);
                registry.draw_tab(self.active_tab, ui, layout.content, host);
            });
    }

    fn draw_tabs(&mut self, ui: &mut egui::Ui, tab_rects: &[egui::Rect]) {
        for (tab, rect) in Tab::ALL.into_iter().zip(tab_rects.iter().copied()) {
            let border = if tab == self.active_tab { TAB_ACTIVE } else { TAB_INACTIVE };
            let painter = ui.painter();
            painter.rect_filled(rect, egui::CornerRadius::ZERO, border);
            painter.rect_filled(rect.shrink(1.0), egui::CornerRadius::ZERO, TAB_FILL);
            painter.text(
                rect.left_top() + egui::vec2(INSET, INSET),
                egui::Align2::LEFT_TOP,
                tab.label(),
                egui::FontId::proportional(TAB_FONT_SIZE),
                PANEL_TEXT,
            );

            let response = ui.interact(rect, ui.id().with(("tab", tab.index())), egui::Sense::click());
            if response.clicked() {
                self.active_tab = tab;
            }
        }
    }
}
