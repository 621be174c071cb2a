// File: crates/forecast-chart/src/raster.rs
// Summary: Skia CPU raster backend: paints a Scene into a raster surface and exports RGBA8 / PNG.

use std::io::Cursor;
use std::path::Path;

use skia_safe as skia;

use crate::chart::Chart;
use crate::error::{ChartError, Result};
use crate::geometry::Size;
use crate::scene::{HighlightNode, Join, Layer, Node, Scene, TooltipNode};
use crate::text::TextMeasure;
use crate::theme::Theme;

const LINE_SPACING: f32 = 1.25;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub background: skia::Color,
    /// Off in pixel snapshots to avoid font variance across platforms.
    pub draw_labels: bool,
}

impl RenderOptions {
    pub fn from_theme(theme: &Theme) -> Self {
        Self { background: theme.background, draw_labels: true }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_theme(&Theme::dark())
    }
}

fn default_typeface() -> Option<skia::Typeface> {
    skia::FontMgr::new().legacy_make_typeface(None::<&str>, skia::FontStyle::normal())
}

fn make_font(size: f32) -> skia::Font {
    match default_typeface() {
        Some(tf) => skia::Font::from_typeface(tf, size),
        None => {
            let mut f = skia::Font::default();
            f.set_size(size);
            f
        }
    }
}

/// Text measurer backed by the system default typeface.
pub struct SkiaTextMeasure {
    typeface: Option<skia::Typeface>,
}

impl SkiaTextMeasure {
    pub fn new() -> Self {
        Self { typeface: default_typeface() }
    }
}

impl Default for SkiaTextMeasure {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasure for SkiaTextMeasure {
    fn measure(&self, text: &str, font_size: f32) -> Size {
        let font = match &self.typeface {
            Some(tf) => skia::Font::from_typeface(tf.clone(), font_size),
            None => make_font(font_size),
        };
        let mut lines = 0usize;
        let mut widest = 0f32;
        for line in text.split('\n') {
            let (w, _) = font.measure_str(line, None);
            widest = widest.max(w);
            lines += 1;
        }
        Size::new(widest as f64, (lines as f32 * font_size * LINE_SPACING) as f64)
    }
}

fn fade(color: skia::Color, opacity: f64) -> skia::Color {
    let a = (color.a() as f64 * opacity.clamp(0.0, 1.0)).round() as u8;
    color.with_a(a)
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Stroke);
    p.set_stroke_width(width);
    p.set_color(color);
    p
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Fill);
    p.set_color(color);
    p
}

/// Draw top-left anchored, possibly multi-line text.
fn draw_text(canvas: &skia::Canvas, text: &str, left: f32, top: f32, size: f32, color: skia::Color) {
    let font = make_font(size);
    let paint = fill_paint(color);
    for (i, line) in text.split('\n').enumerate() {
        let baseline = top + i as f32 * size * LINE_SPACING + size * 0.9;
        canvas.draw_str(line, (left, baseline), &font, &paint);
    }
}

fn draw_node(canvas: &skia::Canvas, node: &Node, opts: &RenderOptions) {
    match node {
        Node::Line { from, to, stroke, .. } => {
            let paint = stroke_paint(stroke.color, stroke.width);
            canvas.draw_line(*from, *to, &paint);
        }
        Node::Label { text, origin, size, color } => {
            if opts.draw_labels {
                draw_text(canvas, text, origin.x as f32, origin.y as f32, *size, *color);
            }
        }
        Node::Polyline { vertices, stroke, join, .. } => {
            let Some((first, rest)) = vertices.split_first() else { return };
            let mut path = skia::Path::new();
            path.move_to(*first);
            for v in rest {
                path.line_to(*v);
            }
            let mut paint = stroke_paint(stroke.color, stroke.width);
            paint.set_stroke_join(match join {
                Join::Round => skia::paint::Join::Round,
                Join::Miter => skia::paint::Join::Miter,
            });
            paint.set_stroke_cap(skia::paint::Cap::Round);
            canvas.draw_path(&path, &paint);
        }
    }
}

fn draw_highlight(canvas: &skia::Canvas, h: &HighlightNode) {
    if !h.visible {
        return;
    }
    let paint = fill_paint(fade(h.color, h.opacity));
    canvas.draw_circle(h.center, h.radius as f32, &paint);
}

fn draw_tooltip(canvas: &skia::Canvas, t: &TooltipNode) {
    if !t.visible || t.opacity <= 0.0 {
        return;
    }
    let rect: skia::Rect = t.rect.into();
    canvas.draw_round_rect(rect, 4.0, 4.0, &fill_paint(fade(t.fill, t.opacity)));
    canvas.draw_round_rect(rect, 4.0, 4.0, &stroke_paint(fade(t.border, t.opacity), 1.0));
    let pad = t.padding as f32;
    draw_text(canvas, &t.text, rect.left + pad, rect.top + pad, t.font_size, fade(t.text_color, t.opacity));
}

/// Paint `scene` onto a fresh CPU raster surface of `size`.
pub fn rasterize(scene: &Scene, size: Size, opts: &RenderOptions) -> Result<skia::Surface> {
    let (width, height) = (size.width.round() as i32, size.height.round() as i32);
    let mut surface = skia::surfaces::raster_n32_premul((width, height))
        .ok_or(ChartError::Surface { width, height })?;
    let canvas = surface.canvas();
    canvas.clear(opts.background);

    for layer in scene.layers() {
        match layer {
            Layer::Node(node) => draw_node(canvas, node, opts),
            Layer::Highlight(h) => draw_highlight(canvas, h),
            Layer::Tooltip(t) => draw_tooltip(canvas, t),
        }
    }
    Ok(surface)
}

/// Rasterize into tightly packed, unpremultiplied RGBA8.
/// Returns `(pixels, width, height, stride)`.
pub fn render_rgba8(scene: &Scene, size: Size, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
    let mut surface = rasterize(scene, size, opts)?;
    let (w, h) = (surface.width(), surface.height());
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        return Err(ChartError::ReadPixels);
    }
    Ok((pixels, w as u32, h as u32, stride))
}

pub fn encode_png(pixels: Vec<u8>, width: u32, height: u32) -> Result<Vec<u8>> {
    let img = image::RgbaImage::from_raw(width, height, pixels)
        .ok_or(ChartError::BufferSize { width, height })?;
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)?;
    Ok(out.into_inner())
}

impl Chart {
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        render_rgba8(self.scene(), self.size(), opts)
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        encode_png(pixels, w, h)
    }

    /// Render the current frame to a PNG at `output_png_path`.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}
