// File: crates/forecast-chart/src/scale.rs
// Summary: Coordinate mapping between the (time, value) domain and widget pixels.

use crate::geometry::{Point, Rect, Size};
use crate::types::{ChartPoint, Insets};

/// Substitute 1 for a non-positive maximum so `v / max` is always defined.
#[inline]
pub fn safe_max(value: f64) -> f64 {
    if value > 0.0 { value } else { 1.0 }
}

/// Numeric domain mapped onto the plot rectangle.
///
/// The value axis always starts at zero; only its upper bound is tracked.
/// `max_y` is stored already clamped through [`safe_max`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl ViewportBounds {
    pub fn new(min_x: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, max_x, max_y: safe_max(max_y) }
    }

    /// Bounds of a point slice, or `None` when it is empty.
    pub fn from_points(points: &[ChartPoint]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let mut min_x = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for p in points {
            let x = p.x();
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            max_y = max_y.max(p.value);
        }
        Some(Self::new(min_x, max_x, max_y))
    }

    #[inline]
    pub fn x_span(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// True when every point shares one timestamp.
    #[inline]
    pub fn is_degenerate_x(&self) -> bool {
        self.x_span() <= 0.0
    }
}

/// Maps domain values into a widget of a given size with fixed insets.
///
/// ```text
/// plot_x(t) = left + (width - left - right) * (t - min_x) / (max_x - min_x)
/// plot_y(v) = bottom - (bottom - top) * (v / max_y)
/// ```
///
/// A zero-width time span places every timestamp on the horizontal centre
/// of the plot rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotMapper {
    bounds: ViewportBounds,
    plot: Rect,
}

impl PlotMapper {
    pub fn new(bounds: ViewportBounds, size: Size, insets: &Insets) -> Self {
        let plot = Rect::from_ltrb(
            insets.left as f64,
            insets.top as f64,
            size.width - insets.right as f64,
            size.height - insets.bottom as f64,
        );
        Self { bounds, plot }
    }

    pub fn bounds(&self) -> &ViewportBounds {
        &self.bounds
    }

    /// The plot rectangle in widget pixels.
    pub fn plot_rect(&self) -> Rect {
        self.plot
    }

    #[inline]
    pub fn plot_x(&self, x: f64) -> f64 {
        if self.bounds.is_degenerate_x() {
            return self.plot.center_x();
        }
        self.plot.left + self.plot.width() * ((x - self.bounds.min_x) / self.bounds.x_span())
    }

    #[inline]
    pub fn plot_y(&self, v: f64) -> f64 {
        self.plot.bottom - self.plot.height() * (v / safe_max(self.bounds.max_y))
    }

    #[inline]
    pub fn to_screen(&self, p: &ChartPoint) -> Point {
        Point::new(self.plot_x(p.x()), self.plot_y(p.value))
    }

    /// Time coordinate under a pixel column. Degenerate spans return `min_x`.
    pub fn time_at(&self, px: f64) -> f64 {
        if self.bounds.is_degenerate_x() || self.plot.width() <= 0.0 {
            return self.bounds.min_x;
        }
        self.bounds.min_x + (px - self.plot.left) / self.plot.width() * self.bounds.x_span()
    }

    /// Value under a pixel row.
    pub fn value_at(&self, py: f64) -> f64 {
        let h = self.plot.height();
        if h <= 0.0 {
            return 0.0;
        }
        (self.plot.bottom - py) / h * safe_max(self.bounds.max_y)
    }
}
