//! Owner and driver of the fixed feature catalog

use tracing::info;

use super::{Feature, FeatureHandle, run_guarded};
use crate::config::Store;
use crate::constants::feature::{DEFAULT_TAB_HEIGHT, FEATURE_GAP};
use crate::features;
use crate::host::Host;

/// Panel tabs, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Display,
    Timing,
    Debug,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Display, Tab::Timing, Tab::Debug];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Display => "Display",
            Tab::Timing => "Timing",
            Tab::Debug => "Debug",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Display => 0,
            Tab::Timing => 1,
            Tab::Debug => 2,
        }
    }
}

/// Features rendered together under one tab, in insertion order
pub struct FeatureGroup {
    pub tab: Tab,
    pub features: Vec<FeatureHandle>,
}

impl FeatureGroup {
    pub fn new(tab: Tab, features: Vec<Box<dyn Feature>>) -> Self {
        Self {
            tab,
            features: features.into_iter().map(FeatureHandle::new).collect(),
        }
    }

    pub fn content_height(&self) -> f32 {
        self.features
            .iter()
            .map(|f| f.dynamic_height() + FEATURE_GAP)
            .sum()
    }
}

pub struct FeatureRegistry {
    store: Store,
    groups: Vec<FeatureGroup>,
}

impl FeatureRegistry {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            groups: Vec::new(),
        }
    }

    /// Load the store, build the shipped catalog and initialize it.
    pub fn initialize(&mut self, host: &mut dyn Host) {
        self.initialize_with(host, features::catalog());
    }

    pub fn initialize_with(&mut self, host: &mut dyn Host, groups: Vec<FeatureGroup>) {
        self.store.load();
        self.groups = groups;

        for group in &mut self.groups {
            for feature in &mut group.features {
                feature.initialize(&mut self.store, host);
            }
        }

        let count: usize = self.groups.iter().map(|g| g.features.len()).sum();
        info!(
            groups = self.groups.len(),
            features = count,
            entries = self.store.len(),
            "Feature registry initialized"
        );
    }

    #[cfg(test)]
    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn groups(&self) -> &[FeatureGroup] {
        &self.groups
    }

    fn group(&self, tab: Tab) -> Option<&FeatureGroup> {
        self.groups.iter().find(|g| g.tab == tab)
    }

    #[cfg(test)]
    pub fn feature(&self, name: &str) -> Option<&FeatureHandle> {
        self.groups
            .iter()
            .flat_map(|g| g.features.iter())
            .find(|f| f.name() == name)
    }

    /// Toggle a feature by name outside of the panel. Returns false when no
    /// feature has that name.
    #[cfg(test)]
    pub fn set_feature_enabled(&mut self, name: &str, enabled: bool, host: &mut dyn Host) -> bool {
        let Some(feature) = self
            .groups
            .iter_mut()
            .flat_map(|g| g.features.iter_mut())
            .find(|f| f.name() == name)
        else {
            return false;
        };
        feature.set_enabled(enabled, &mut self.store, host);
        true
    }

    /// Tick every enabled feature. A failing or panicking feature is logged
    /// and does not stop the rest of the pass.
    pub fn on_update(&mut self, host: &mut dyn Host) {
        for group in &mut self.groups {
            for feature in &mut group.features {
                if !feature.is_enabled() {
                    continue;
                }
                run_guarded(feature.name(), "on_update", || feature.update(&mut *host));
            }
        }
    }

    /// Sum of (height + gap) over the tab's features, recomputed per call
    pub fn group_content_height(&self, tab: Tab) -> f32 {
        match self.group(tab) {
            Some(group) => group.content_height(),
            None => DEFAULT_TAB_HEIGHT,
        }
    }

    /// Stack the tab's features vertically inside `area`, letting each draw
    /// itself. Heights are taken just before each feature draws.
    pub fn draw_tab(&mut self, tab: Tab, ui: &mut egui::Ui, area: egui::Rect, host: &mut dyn Host) {
        let Some(group) = self.groups.iter_mut().find(|g| g.tab == tab) else {
            return;
        };
        let mut regions = RegionStack::new(area);
        for feature in &mut group.features {
            let rect = regions.next(feature.dynamic_height());
            feature.draw(ui, rect, &mut self.store, host);
        }
    }
}

/// Hands out full-width feature regions top to bottom, `FEATURE_GAP` apart
struct RegionStack {
    area: egui::Rect,
    y_offset: f32,
}

impl RegionStack {
    fn new(area: egui::Rect) -> Self {
        Self { area, y_offset: 0.0 }
    }

    fn next(&mut self, height: f32) -> egui::Rect {
        let rect = egui::Rect::from_min_size(
            egui::pos2(self.area.min.x, self.area.min.y + self.y_offset),
            egui::vec2(self.area.width(), height),
        );
        self.y_offset += height + FEATURE_GAP;
        rect
    }
}
