// File: crates/forecast-chart/src/scene.rs
// Summary: Off-screen visual tree for one redraw: an ordered display list plus the two overlay layers.
// Notes:
// - Static content is painted in insertion order.
// - The highlight marker and tooltip are held outside the list so they always
//   paint last, tooltip above highlight, whatever was pushed before them.

use skia_safe as skia;

use crate::geometry::{Point, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Grid,
    Axis,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: skia::Color,
    pub width: f32,
}

impl Stroke {
    pub const fn new(color: skia::Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// How consecutive polyline segments meet. One join applies to a whole line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Join {
    Miter,
    #[default]
    Round,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Line { kind: LineKind, from: Point, to: Point, stroke: Stroke },
    /// Top-left anchored text; `'\n'` starts a new line.
    Label { text: String, origin: Point, size: f32, color: skia::Color },
    Polyline { series: usize, vertices: Vec<Point>, stroke: Stroke, join: Join },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HighlightNode {
    pub center: Point,
    pub radius: f64,
    pub opacity: f64,
    pub visible: bool,
    pub color: skia::Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipNode {
    pub rect: Rect,
    pub text: String,
    pub opacity: f64,
    pub visible: bool,
    pub font_size: f32,
    pub padding: f64,
    pub fill: skia::Color,
    pub border: skia::Color,
    pub text_color: skia::Color,
}

/// Reference to any painted element, in paint order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Layer<'a> {
    Node(&'a Node),
    Highlight(&'a HighlightNode),
    Tooltip(&'a TooltipNode),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    nodes: Vec<Node>,
    highlight: Option<HighlightNode>,
    tooltip: Option<TooltipNode>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn attach_overlays(&mut self, highlight: HighlightNode, tooltip: TooltipNode) {
        self.highlight = Some(highlight);
        self.tooltip = Some(tooltip);
    }

    pub fn highlight(&self) -> Option<&HighlightNode> {
        self.highlight.as_ref()
    }

    pub fn highlight_mut(&mut self) -> Option<&mut HighlightNode> {
        self.highlight.as_mut()
    }

    pub fn tooltip(&self) -> Option<&TooltipNode> {
        self.tooltip.as_ref()
    }

    pub fn tooltip_mut(&mut self) -> Option<&mut TooltipNode> {
        self.tooltip.as_mut()
    }

    /// Everything in paint order: static nodes, then highlight, then tooltip.
    pub fn layers(&self) -> impl Iterator<Item = Layer<'_>> {
        self.nodes
            .iter()
            .map(Layer::Node)
            .chain(self.highlight.iter().map(Layer::Highlight))
            .chain(self.tooltip.iter().map(Layer::Tooltip))
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.highlight.is_none() && self.tooltip.is_none()
    }

    pub fn lines(&self, kind: LineKind) -> impl Iterator<Item = (&Point, &Point)> {
        self.nodes.iter().filter_map(move |n| match n {
            Node::Line { kind: k, from, to, .. } if *k == kind => Some((from, to)),
            _ => None,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Label { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn polylines(&self) -> impl Iterator<Item = &[Point]> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Polyline { vertices, .. } => Some(vertices.as_slice()),
            _ => None,
        })
    }
}
