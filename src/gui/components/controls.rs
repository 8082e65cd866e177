//! Small controls shared by feature regions

use eframe::egui;

use crate::feature::GuiContext;
use crate::gui::constants::*;

/// The enable toggle every feature draws first
pub fn feature_checkbox(ui: &mut egui::Ui, ctx: &mut GuiContext<'_>, label: &str) -> bool {
    ui.checkbox(&mut ctx.enabled, label).changed()
}

/// Labelled text field backed by `text`. Returns the parsed value only when
/// an edit produced a positive number.
pub fn positive_float_field(ui: &mut egui::Ui, label: &str, text: &mut String) -> Option<f32> {
    ui.label(label);
    let response = ui.add(egui::TextEdit::singleline(text).desired_width(INPUT_WIDTH));
    if !response.changed() {
        return None;
    }
    parse_positive(text)
}

pub fn parse_positive(text: &str) -> Option<f32> {
    text.trim().parse::<f32>().ok().filter(|v| is_positive(*v))
}

/// `value` if it would pass the text field check, otherwise `default`
pub fn positive_or(value: f32, default: f32) -> f32 {
    if is_positive(value) { value } else { default }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

/// Green or red one-line status
pub fn status_line(ui: &mut egui::Ui, ok: bool, text: &str) {
    let color = if ok { STATUS_OK } else { STATUS_MISSING };
    ui.colored_label(color, text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive_accepts_positive_numbers() {
        assert_eq!(parse_positive("2.5"), Some(2.5));
        assert_eq!(parse_positive(" 3 "), Some(3.0));
    }

    #[test]
    fn test_parse_positive_rejects_zero_negative_and_garbage() {
        assert_eq!(parse_positive("0"), None);
        assert_eq!(parse_positive("-1.5"), None);
        assert_eq!(parse_positive("fast"), None);
        assert_eq!(parse_positive("inf"), None);
        assert_eq!(parse_positive(""), None);
    }

    #[test]
    fn test_positive_or_falls_back() {
        assert_eq!(positive_or(1.5, 2.0), 1.5);
        assert_eq!(positive_or(0.0, 2.0), 2.0);
        assert_eq!(positive_or(-3.0, 2.0), 2.0);
        assert_eq!(positive_or(f32::NAN, 2.0), 2.0);
        assert_eq!(positive_or(f32::INFINITY, 2.0), 2.0);
    }
}
