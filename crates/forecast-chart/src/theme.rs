// File: crates/forecast-chart/src/theme.rs
// Summary: Light/Dark colour presets for chart chrome (axes, labels, highlight, tooltip).

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    /// Grid pen used when no series supplies one.
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub highlight: skia::Color,
    pub tooltip_fill: skia::Color,
    pub tooltip_border: skia::Color,
    pub tooltip_text: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 24, 26, 32),
            grid: skia::Color::from_argb(40, 255, 255, 255),
            axis_line: skia::Color::from_argb(255, 128, 128, 128),
            axis_label: skia::Color::from_argb(255, 211, 211, 211),
            highlight: skia::Color::from_argb(255, 255, 215, 0),
            tooltip_fill: skia::Color::from_argb(230, 32, 36, 44),
            tooltip_border: skia::Color::from_argb(255, 0, 191, 255),
            tooltip_text: skia::Color::from_argb(255, 240, 240, 245),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(60, 0, 0, 0),
            axis_line: skia::Color::from_argb(255, 90, 90, 100),
            axis_label: skia::Color::from_argb(255, 40, 40, 50),
            highlight: skia::Color::from_argb(255, 230, 120, 0),
            tooltip_fill: skia::Color::from_argb(240, 255, 255, 255),
            tooltip_border: skia::Color::from_argb(255, 30, 120, 200),
            tooltip_text: skia::Color::from_argb(255, 20, 20, 30),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::dark()
}
