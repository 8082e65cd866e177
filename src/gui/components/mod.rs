pub mod controls;

pub use controls::{feature_checkbox, positive_float_field, positive_or, status_line};
