//! The shipped feature catalog

mod fps_counter;
mod frame_budget;
mod frame_inspector;
mod session_timer;
mod time_scale;
mod ui_scale;

pub use fps_counter::FpsCounter;
pub use frame_budget::FrameBudget;
pub use frame_inspector::FrameInspector;
pub use session_timer::SessionTimer;
pub use time_scale::TimeScale;
pub use ui_scale::UiScale;

use crate::feature::{FeatureGroup, Tab};

/// Fixed catalog, one group per tab in tab order
pub fn catalog() -> Vec<FeatureGroup> {
    vec![
        FeatureGroup::new(
            Tab::Display,
            vec![Box::new(FpsCounter::default()), Box::new(UiScale::default())],
        ),
        FeatureGroup::new(
            Tab::Timing,
            vec![Box::new(TimeScale::default()), Box::new(SessionTimer::default())],
        ),
        FeatureGroup::new(
            Tab::Debug,
            vec![Box::new(FrameInspector::default()), Box::new(FrameBudget::default())],
        ),
    ]
}
