// File: crates/forecast-chart/src/text.rs
// Summary: Label/tooltip formatting and the text measuring seam used for tooltip layout.

use chrono::NaiveDateTime;

use crate::geometry::Size;
use crate::types::ChartPoint;

/// Y-axis label: one decimal.
pub fn format_axis_value(v: f64) -> String {
    format!("{v:.1}")
}

/// X-axis label: month/day over 24h hour:minute.
pub fn format_axis_time(t: NaiveDateTime) -> String {
    t.format("%m/%d\n%H:%M").to_string()
}

/// Tooltip body for the threshold mode, e.g. `"01/12 3:00 AM\n0.50 inches"`.
pub fn format_tooltip(p: &ChartPoint, unit: &str) -> String {
    format!("{}\n{:.2} {unit}", p.time.format("%m/%d %-I:%M %p"), p.value)
}

/// Shorter tooltip body for the always-on mode (time of day only).
pub fn format_tooltip_short(p: &ChartPoint, unit: &str) -> String {
    format!("{}\n{:.2} {unit}", p.time.format("%-I:%M %p"), p.value)
}

/// Measures laid-out text. Multi-line strings are split on `'\n'`.
pub trait TextMeasure {
    fn measure(&self, text: &str, font_size: f32) -> Size;
}

/// Fixed-advance estimate; deterministic, so layout does not depend on
/// which fonts the host has installed.
#[derive(Clone, Copy, Debug)]
pub struct ApproxTextMeasure {
    /// Average glyph advance as a fraction of the font size.
    pub advance: f32,
    /// Line height as a fraction of the font size.
    pub line_height: f32,
}

impl Default for ApproxTextMeasure {
    fn default() -> Self {
        Self { advance: 0.6, line_height: 1.25 }
    }
}

impl TextMeasure for ApproxTextMeasure {
    fn measure(&self, text: &str, font_size: f32) -> Size {
        let lines = text.split('\n');
        let (count, widest) = lines.fold((0usize, 0usize), |(n, w), l| (n + 1, w.max(l.chars().count())));
        Size::new(
            (widest as f32 * font_size * self.advance) as f64,
            (count as f32 * font_size * self.line_height) as f64,
        )
    }
}
