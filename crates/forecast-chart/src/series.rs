// File: crates/forecast-chart/src/series.rs
// Summary: Series model: an ordered point list plus its line and grid styling.

use skia_safe as skia;

use crate::types::ChartPoint;

/// Fewest points a series needs before it draws anything.
pub const MIN_DRAWABLE_POINTS: usize = 2;

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    pub points: Vec<ChartPoint>,
    pub stroke: skia::Color,
    pub stroke_width: f32,
    /// Grid pen; only the primary (first) series' grid style is used.
    pub grid: skia::Color,
    pub grid_width: f32,
}

impl Default for ChartSeries {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            stroke: skia::Color::from_argb(255, 0, 191, 255),
            stroke_width: 3.5,
            grid: skia::Color::from_argb(40, 255, 255, 255),
            grid_width: 1.25,
        }
    }
}

impl ChartSeries {
    pub fn new(points: Vec<ChartPoint>) -> Self {
        Self { points, ..Self::default() }
    }

    pub fn with_stroke(mut self, color: skia::Color, width: f32) -> Self {
        self.stroke = color;
        self.stroke_width = width;
        self
    }

    pub fn with_grid(mut self, color: skia::Color, width: f32) -> Self {
        self.grid = color;
        self.grid_width = width;
        self
    }

    /// Degenerate series (fewer than two points) render nothing.
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= MIN_DRAWABLE_POINTS
    }

    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
}
