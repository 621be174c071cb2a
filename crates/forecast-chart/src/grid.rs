// File: crates/forecast-chart/src/grid.rs
// Summary: Gridline and axis-label layout for a mapped viewport.

use crate::geometry::Point;
use crate::scale::PlotMapper;
use crate::text::{format_axis_time, format_axis_value};
use crate::types::x_to_time;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridLine {
    pub from: Point,
    pub to: Point,
    /// Domain value the line marks (value for horizontals, time ms for verticals).
    pub value: f64,
    pub label: String,
    pub label_origin: Point,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridLayout {
    pub horizontal: Vec<GridLine>,
    pub vertical: Vec<GridLine>,
}

/// Lay out `y_steps + 1` horizontal lines over `[0, max_y]` and
/// `x_steps + 1` vertical lines over `[min_x, max_x]`.
pub fn layout_grid(mapper: &PlotMapper, x_steps: usize, y_steps: usize) -> GridLayout {
    let plot = mapper.plot_rect();
    let bounds = mapper.bounds();

    let horizontal = linspace(0.0, bounds.max_y, y_steps + 1)
        .into_iter()
        .map(|v| {
            let y = mapper.plot_y(v);
            GridLine {
                from: Point::new(plot.left, y),
                to: Point::new(plot.right, y),
                value: v,
                label: format_axis_value(v),
                label_origin: Point::new(5.0, y - 8.0),
            }
        })
        .collect();

    let vertical = linspace(bounds.min_x, bounds.max_x, x_steps + 1)
        .into_iter()
        .enumerate()
        .map(|(i, t)| {
            // Evenly spaced in pixels even when the time span collapses.
            let x = if bounds.is_degenerate_x() {
                plot.center_x()
            } else {
                plot.left + plot.width() * (i as f64 / x_steps.max(1) as f64)
            };
            GridLine {
                from: Point::new(x, plot.top),
                to: Point::new(x, plot.bottom),
                value: t,
                label: format_axis_time(x_to_time(t)),
                label_origin: Point::new(x - 25.0, plot.bottom + 5.0),
            }
        })
        .collect();

    GridLayout { horizontal, vertical }
}
