//! Feature lifecycle: enable/disable state machine, persisted values and
//! self-drawn regions
//!
//! A concrete feature implements [`Feature`]. The shared state every feature
//! has (enabled flag, initialized flag, persistence key) lives in
//! [`FeatureHandle`], which is what the registry stores and drives.

pub mod registry;

use std::panic::{self, AssertUnwindSafe};

use anyhow::Result;
use tracing::{error, info};

use crate::config::{FromValue, Store, Value};
use crate::constants::feature::{DISABLED_HEIGHT, ENABLED_HEIGHT};
use crate::host::Host;

pub use registry::{FeatureGroup, FeatureRegistry, Tab};

/// Persistence key derived from a feature's display name
pub fn persistence_key(name: &str) -> String {
    name.replace([' ', '+'], "_")
}

/// Run one feature hook, logging an error or a panic instead of passing it
/// on to the host.
pub(crate) fn run_guarded(feature: &str, hook: &str, f: impl FnOnce() -> Result<()>) {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!(feature, hook, error = ?e, "Feature hook failed"),
        Err(_) => error!(feature, hook, "Feature hook panicked"),
    }
}

/// A toggle-able unit of behavior with a self-drawn panel region.
///
/// Hooks return errors instead of panicking. The handle logs errors and
/// panics alike, and the feature simply does nothing useful that frame.
pub trait Feature {
    /// Display name; constant per type
    fn name(&self) -> &'static str;

    /// Read feature-specific persisted values. Runs once, before the enabled
    /// flag is restored.
    fn load(&mut self, _persisted: &Persisted<'_>) {}

    fn on_enable(&mut self, _host: &mut dyn Host) -> Result<()> {
        Ok(())
    }

    fn on_disable(&mut self, _host: &mut dyn Host) -> Result<()> {
        Ok(())
    }

    /// Per-frame logic, only called while enabled
    fn on_update(&mut self, _host: &mut dyn Host) -> Result<()> {
        Ok(())
    }

    /// Draw into the region the registry allocated. Writing
    /// `ctx.enabled` toggles the feature once drawing returns.
    fn on_gui(&mut self, ui: &mut egui::Ui, ctx: &mut GuiContext<'_>);

    /// Height of this feature's region for the current frame
    fn dynamic_height(&self, enabled: bool) -> f32 {
        if enabled { ENABLED_HEIGHT } else { DISABLED_HEIGHT }
    }
}

/// Store access scoped to a single feature's key
pub struct Persisted<'a> {
    store: &'a mut Store,
    key: &'a str,
    initialized: bool,
}

impl<'a> Persisted<'a> {
    pub(crate) fn new(store: &'a mut Store, key: &'a str, initialized: bool) -> Self {
        Self { store, key, initialized }
    }

    pub fn get<T: FromValue>(&self, name: &str, default: T) -> T {
        self.store.feature_value(self.key, name, default)
    }

    /// Store and save `value`. Ignored until the feature is initialized.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) {
        if self.initialized {
            self.store.set_feature_value(self.key, name, value);
        }
    }
}

/// Everything a feature may touch while drawing itself
pub struct GuiContext<'a> {
    /// Checkbox target; starts as the current state
    pub enabled: bool,
    pub persisted: Persisted<'a>,
    pub host: &'a dyn Host,
}

pub struct FeatureHandle {
    feature: Box<dyn Feature>,
    key: String,
    enabled: bool,
    initialized: bool,
}

impl FeatureHandle {
    pub fn new(feature: Box<dyn Feature>) -> Self {
        let key = persistence_key(feature.name());
        Self {
            feature,
            key,
            enabled: false,
            initialized: false,
        }
    }

    pub fn name(&self) -> &'static str {
        self.feature.name()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[cfg(test)]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Restore persisted state. Runs the enable hook when the feature was
    /// saved as enabled.
    pub fn initialize(&mut self, store: &mut Store, host: &mut dyn Host) {
        let persisted = Persisted::new(store, &self.key, false);
        let feature = &mut self.feature;
        run_guarded(feature.name(), "load", || {
            feature.load(&persisted);
            Ok(())
        });
        self.enabled = store.feature_enabled(&self.key, false);
        self.initialized = true;

        if self.enabled {
            info!(feature = self.name(), "Restoring enabled feature");
            self.run_enable_hook(host);
        }
    }

    pub fn set_enabled(&mut self, enabled: bool, store: &mut Store, host: &mut dyn Host) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;

        if enabled {
            self.run_enable_hook(host);
        } else {
            let feature = &mut self.feature;
            run_guarded(feature.name(), "on_disable", || feature.on_disable(host));
        }

        if self.initialized {
            store.set_feature_enabled(&self.key, enabled);
        }

        info!(
            feature = self.name(),
            state = if enabled { "ENABLED" } else { "DISABLED" },
            "Feature toggled"
        );
    }

    fn run_enable_hook(&mut self, host: &mut dyn Host) {
        let feature = &mut self.feature;
        run_guarded(feature.name(), "on_enable", || feature.on_enable(host));
    }

    /// Run one frame of the feature. Returns the hook error, if any, so the
    /// caller can decide how to report it.
    pub fn update(&mut self, host: &mut dyn Host) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }
        self.feature.on_update(host)
    }

    pub fn dynamic_height(&self) -> f32 {
        self.feature.dynamic_height(self.enabled)
    }

    /// Draw the feature inside `area`, then apply any toggle it requested.
    pub fn draw(&mut self, ui: &mut egui::Ui, area: egui::Rect, store: &mut Store, host: &mut dyn Host) {
        let requested = {
            let mut ctx = GuiContext {
                enabled: self.enabled,
                persisted: Persisted::new(store, &self.key, self.initialized),
                host: &*host,
            };
            let feature = &mut self.feature;
            ui.scope_builder(egui::UiBuilder::new().max_rect(area), |ui| {
                ui.set_clip_rect(area.intersect(ui.clip_rect()));
                run_guarded(feature.name(), "on_gui", || {
                    feature.on_gui(ui, &mut ctx);
                    Ok(())
                });
            });
            ctx.enabled
        };

        self.set_enabled(requested, store, host);
    }
}
