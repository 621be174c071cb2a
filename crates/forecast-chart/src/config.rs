// File: crates/forecast-chart/src/config.rs
// Summary: Chart configuration: layout constants, hit-testing policy, animation timings.

use std::time::Duration;

use crate::theme::Theme;
use crate::types::{Insets, GRID_STEPS, HIT_THRESHOLD_PX};

/// Which hit-testing policy pointer moves use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionMode {
    /// Highlight + fading tooltip only within the hit threshold.
    #[default]
    Threshold,
    /// Tooltip always follows the nearest point; no threshold, no fades.
    AlwaysOn,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationTimings {
    /// One direction of the highlight pulse (1.0 -> 0.3); a full cycle is twice this.
    pub pulse_half_period: Duration,
    pub pulse_low: f64,
    pub fade_in: Duration,
    pub fade_out: Duration,
}

impl Default for AnimationTimings {
    fn default() -> Self {
        Self {
            pulse_half_period: Duration::from_millis(600),
            pulse_low: 0.3,
            fade_in: Duration::from_millis(600),
            fade_out: Duration::from_millis(200),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub insets: Insets,
    pub x_steps: usize,
    pub y_steps: usize,
    pub hit_threshold: f64,
    pub mode: InteractionMode,
    /// Appended to tooltip values, e.g. `"0.50 inches"`.
    pub unit: String,
    /// Tooltip left edge = pointer + offset, unless that overflows.
    pub tooltip_offset: f64,
    /// When flipped, the tooltip's right edge sits this far left of the pointer.
    pub tooltip_flip_gap: f64,
    /// Tooltip top = pointer - height + nudge.
    pub tooltip_nudge: f64,
    pub tooltip_padding: f64,
    pub tooltip_font_size: f32,
    pub highlight_radius: f64,
    pub label_font_size: f32,
    pub time_label_font_size: f32,
    pub timings: AnimationTimings,
    pub theme: Theme,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            insets: Insets::default(),
            x_steps: GRID_STEPS,
            y_steps: GRID_STEPS,
            hit_threshold: HIT_THRESHOLD_PX,
            mode: InteractionMode::Threshold,
            unit: "inches".to_string(),
            tooltip_offset: 20.0,
            tooltip_flip_gap: 10.0,
            tooltip_nudge: 16.0,
            tooltip_padding: 6.0,
            tooltip_font_size: 12.0,
            highlight_radius: 5.0,
            label_font_size: 12.0,
            time_label_font_size: 11.0,
            timings: AnimationTimings::default(),
            theme: Theme::dark(),
        }
    }
}

impl ChartConfig {
    pub fn with_mode(mut self, mode: InteractionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}
