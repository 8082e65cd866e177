//! Host collaborator contract
//!
//! Features never reach into the host directly; they go through [`Host`],
//! which exposes the clock and the few knobs a feature may turn.

/// State the host application exposes to features.
pub trait Host {
    /// Scaled seconds since startup
    fn time(&self) -> f64;
    /// Scaled seconds elapsed during the current frame
    fn delta_time(&self) -> f32;
    fn unscaled_time(&self) -> f64;
    fn unscaled_delta_time(&self) -> f32;
    fn frame_count(&self) -> u64;

    fn time_scale(&self) -> f32;
    fn set_time_scale(&mut self, scale: f32);

    /// Current UI zoom, or None when the host has no zoom control
    fn ui_zoom(&self) -> Option<f32>;
    fn set_ui_zoom(&mut self, zoom: f32);
}

/// Frame-stepped host state owned by the demo application
#[derive(Debug, Clone)]
pub struct SimHost {
    time: f64,
    unscaled_time: f64,
    delta_time: f32,
    unscaled_delta_time: f32,
    frame_count: u64,
    time_scale: f32,
    zoom: Option<f32>,
}

impl Default for SimHost {
    fn default() -> Self {
        Self {
            time: 0.0,
            unscaled_time: 0.0,
            delta_time: 0.0,
            unscaled_delta_time: 0.0,
            frame_count: 0,
            time_scale: 1.0,
            zoom: Some(1.0),
        }
    }
}

impl SimHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host without zoom support
    #[cfg(test)]
    pub fn without_zoom() -> Self {
        Self {
            zoom: None,
            ..Self::default()
        }
    }

    /// Start a new frame that took `real_dt` seconds of wall time.
    pub fn advance(&mut self, real_dt: f32) {
        let real_dt = real_dt.max(0.0);
        self.unscaled_delta_time = real_dt;
        self.delta_time = real_dt * self.time_scale.max(0.0);
        self.unscaled_time += real_dt as f64;
        self.time += self.delta_time as f64;
        self.frame_count += 1;
    }
}

impl Host for SimHost {
    fn time(&self) -> f64 {
        self.time
    }

    fn delta_time(&self) -> f32 {
        self.delta_time
    }

    fn unscaled_time(&self) -> f64 {
        self.unscaled_time
    }

    fn unscaled_delta_time(&self) -> f32 {
        self.unscaled_delta_time
    }

    fn frame_count(&self) -> u64 {
        self.frame_count
    }

    fn time_scale(&self) -> f32 {
        self.time_scale
    }

    fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale;
    }

    fn ui_zoom(&self) -> Option<f32> {
        self.zoom
    }

    fn set_ui_zoom(&mut self, zoom: f32) {
        if self.zoom.is_some() {
            self.zoom = Some(zoom);
        }
    }
}
