// File: crates/forecast-chart/src/render.rs
// Summary: Static renderer: rebuilds the whole visual tree (grid, axes, series) for one redraw.

use tracing::{debug, trace};

use crate::config::ChartConfig;
use crate::geometry::{Point, Rect, Size};
use crate::grid::layout_grid;
use crate::scale::{PlotMapper, ViewportBounds};
use crate::scene::{HighlightNode, Join, LineKind, Node, Scene, Stroke, TooltipNode};
use crate::series::ChartSeries;
use crate::theme::Theme;

/// Result of one full redraw.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub scene: Scene,
    /// Bounds of the primary series; `None` when the redraw was a no-op.
    pub viewport: Option<ViewportBounds>,
}

/// Grid pen from the primary series, or the theme's translucent default.
pub fn grid_stroke(series: &[ChartSeries], theme: &Theme) -> Stroke {
    match series.first() {
        Some(s) => Stroke::new(s.grid, s.grid_width),
        None => Stroke::new(theme.grid, 1.0),
    }
}

/// Build the scene for `series` drawn into a widget of `size`.
///
/// Order: gridlines + labels, axis lines, one polyline per drawable series,
/// then the (hidden) highlight and tooltip overlays on top.
/// No series, or a primary series with fewer than two points, yields an
/// empty scene.
pub fn build_frame(series: &[ChartSeries], size: Size, config: &ChartConfig) -> Frame {
    let Some(primary) = series.first().filter(|s| s.is_drawable()) else {
        trace!("redraw skipped: primary series missing or degenerate");
        return Frame::default();
    };
    let Some(viewport) = ViewportBounds::from_points(&primary.points) else {
        return Frame::default();
    };

    let mapper = PlotMapper::new(viewport, size, &config.insets);
    let mut scene = Scene::new();

    draw_grid(&mut scene, &mapper, series, config);
    draw_axes(&mut scene, mapper.plot_rect(), &config.theme);
    for (idx, s) in series.iter().enumerate() {
        draw_series(&mut scene, idx, s, size, config);
    }
    let (highlight, tooltip) = hidden_overlays(config);
    scene.attach_overlays(highlight, tooltip);

    debug!(
        series = series.len(),
        min_x = viewport.min_x,
        max_x = viewport.max_x,
        max_y = viewport.max_y,
        "chart redrawn"
    );
    Frame { scene, viewport: Some(viewport) }
}

fn draw_grid(scene: &mut Scene, mapper: &PlotMapper, series: &[ChartSeries], config: &ChartConfig) {
    let pen = grid_stroke(series, &config.theme);
    let layout = layout_grid(mapper, config.x_steps, config.y_steps);

    for line in layout.horizontal {
        scene.push(Node::Line { kind: LineKind::Grid, from: line.from, to: line.to, stroke: pen });
        scene.push(Node::Label {
            text: line.label,
            origin: line.label_origin,
            size: config.label_font_size,
            color: config.theme.axis_label,
        });
    }
    for line in layout.vertical {
        scene.push(Node::Line { kind: LineKind::Grid, from: line.from, to: line.to, stroke: pen });
        scene.push(Node::Label {
            text: line.label,
            origin: line.label_origin,
            size: config.time_label_font_size,
            color: config.theme.axis_label,
        });
    }
}

fn draw_axes(scene: &mut Scene, plot: Rect, theme: &Theme) {
    let stroke = Stroke::new(theme.axis_line, 1.0);
    // X axis along the bottom margin, Y axis along the left margin.
    scene.push(Node::Line {
        kind: LineKind::Axis,
        from: Point::new(plot.left, plot.bottom),
        to: Point::new(plot.right, plot.bottom),
        stroke,
    });
    scene.push(Node::Line {
        kind: LineKind::Axis,
        from: Point::new(plot.left, plot.top),
        to: Point::new(plot.left, plot.bottom),
        stroke,
    });
}

/// Each series scales against its own bounds, not the primary viewport.
fn draw_series(scene: &mut Scene, idx: usize, series: &ChartSeries, size: Size, config: &ChartConfig) {
    if !series.is_drawable() {
        trace!(series = idx, points = series.len(), "series skipped: fewer than two points");
        return;
    }
    let Some(local) = ViewportBounds::from_points(&series.points) else { return };
    let mapper = PlotMapper::new(local, size, &config.insets);
    let vertices = series.points.iter().map(|p| mapper.to_screen(p)).collect();
    scene.push(Node::Polyline {
        series: idx,
        vertices,
        stroke: Stroke::new(series.stroke, series.stroke_width),
        join: Join::Round,
    });
}

pub fn hidden_overlays(config: &ChartConfig) -> (HighlightNode, TooltipNode) {
    let theme = &config.theme;
    let highlight = HighlightNode {
        center: Point::default(),
        radius: config.highlight_radius,
        opacity: 1.0,
        visible: false,
        color: theme.highlight,
    };
    let tooltip = TooltipNode {
        rect: Rect::default(),
        text: String::new(),
        opacity: 0.0,
        visible: false,
        font_size: config.tooltip_font_size,
        padding: config.tooltip_padding,
        fill: theme.tooltip_fill,
        border: theme.tooltip_border,
        text_color: theme.tooltip_text,
    };
    (highlight, tooltip)
}
