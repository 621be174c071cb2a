// File: crates/forecast-chart/src/interaction.rs
// Summary: Pointer hit-testing against the primary series, highlight/tooltip state, and tooltip placement.

use std::time::Instant;

use tracing::trace;

use crate::animation::{Pulse, TooltipAnimator, TooltipTransition};
use crate::config::{ChartConfig, InteractionMode};
use crate::geometry::{Point, Rect, Size};
use crate::scale::PlotMapper;
use crate::scene::Scene;
use crate::text::{format_tooltip, format_tooltip_short, TextMeasure};
use crate::types::ChartPoint;

/// Visibility side effects surfaced to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartEvent {
    HighlightShown { index: usize },
    HighlightHidden,
    /// Tooltip appeared without a fade (always-on mode).
    TooltipShown,
    TooltipFadeInStarted,
    TooltipFadeOutStarted,
    TooltipHidden,
    VisibilityChanged { visible: bool },
}

/// Index of the point whose mapped X is closest to `pointer_x`.
/// Ties keep the earlier point.
pub fn nearest_point(points: &[ChartPoint], mapper: &PlotMapper, pointer_x: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, p) in points.iter().enumerate() {
        let d = (mapper.plot_x(p.x()) - pointer_x).abs();
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}

/// Tooltip left edge: `offset` right of the pointer, or flipped to the left
/// (`width + gap` before the pointer) when it would overflow `widget_width`.
pub fn tooltip_left(pointer_x: f64, width: f64, widget_width: f64, offset: f64, gap: f64) -> f64 {
    if pointer_x + width + offset > widget_width {
        pointer_x - width - gap
    } else {
        pointer_x + offset
    }
}

/// Tooltip top edge: bottom sits `nudge` below the pointer.
pub fn tooltip_top(pointer_y: f64, height: f64, nudge: f64) -> f64 {
    pointer_y - height + nudge
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HitResult {
    /// Nearest point is within the threshold.
    Hit { index: usize, anchor: Point, dy: f64 },
    Miss { index: usize, dy: f64 },
}

pub fn hit_test(points: &[ChartPoint], mapper: &PlotMapper, pointer: Point, threshold: f64) -> Option<HitResult> {
    let index = nearest_point(points, mapper, pointer.x)?;
    let anchor = mapper.to_screen(&points[index]);
    let dy = (anchor.y - pointer.y).abs();
    if dy <= threshold {
        Some(HitResult::Hit { index, anchor, dy })
    } else {
        Some(HitResult::Miss { index, dy })
    }
}

/// What a pointer event is tested against: the primary series under the
/// viewport cached by the last redraw.
pub struct HitTarget<'a> {
    pub points: &'a [ChartPoint],
    pub mapper: &'a PlotMapper,
    pub widget: Size,
    pub measure: &'a dyn TextMeasure,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HighlightState {
    pub index: Option<usize>,
    pub center: Point,
    pub visible: bool,
    pub pulse: Pulse,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipState {
    pub text: String,
    pub rect: Rect,
    pub animator: TooltipAnimator,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InteractionEngine {
    pub highlight: HighlightState,
    pub tooltip: TooltipState,
}

impl InteractionEngine {
    pub fn new(config: &ChartConfig) -> Self {
        let t = &config.timings;
        Self {
            highlight: HighlightState {
                index: None,
                center: Point::default(),
                visible: false,
                pulse: Pulse::new(t.pulse_half_period, t.pulse_low),
            },
            tooltip: TooltipState {
                text: String::new(),
                rect: Rect::default(),
                animator: TooltipAnimator::new(t.fade_in, t.fade_out),
            },
        }
    }

    pub fn pointer_moved(
        &mut self,
        config: &ChartConfig,
        target: &HitTarget<'_>,
        pointer: Point,
        now: Instant,
        events: &mut Vec<ChartEvent>,
    ) {
        match config.mode {
            InteractionMode::Threshold => self.move_threshold(config, target, pointer, now, events),
            InteractionMode::AlwaysOn => self.move_always_on(config, target, pointer, events),
        }
    }

    fn move_threshold(
        &mut self,
        config: &ChartConfig,
        target: &HitTarget<'_>,
        pointer: Point,
        now: Instant,
        events: &mut Vec<ChartEvent>,
    ) {
        let Some(hit) = hit_test(target.points, target.mapper, pointer, config.hit_threshold) else { return };
        trace!(?hit, x = pointer.x, y = pointer.y, "hit test");

        match hit {
            HitResult::Hit { index, anchor, .. } => {
                self.highlight.index = Some(index);
                self.highlight.center = anchor;
                if !self.highlight.visible {
                    self.highlight.visible = true;
                    self.highlight.pulse.start(now);
                    events.push(ChartEvent::HighlightShown { index });
                }

                let text = format_tooltip(&target.points[index], &config.unit);
                let size = tooltip_size(target.measure, &text, config);
                let left = tooltip_left(pointer.x, size.width, target.widget.width, config.tooltip_offset, config.tooltip_flip_gap);
                let top = tooltip_top(pointer.y, size.height, config.tooltip_nudge);
                self.tooltip.rect = Rect::from_origin_size(Point::new(left, top), size);
                self.tooltip.text = text;

                if self.tooltip.animator.show(now) {
                    events.push(ChartEvent::TooltipFadeInStarted);
                }
            }
            HitResult::Miss { .. } => {
                self.hide_highlight(events);
                if self.tooltip.animator.hide(now) {
                    events.push(ChartEvent::TooltipFadeOutStarted);
                }
            }
        }
    }

    fn move_always_on(
        &mut self,
        config: &ChartConfig,
        target: &HitTarget<'_>,
        pointer: Point,
        events: &mut Vec<ChartEvent>,
    ) {
        let Some(index) = nearest_point(target.points, target.mapper, pointer.x) else { return };
        let text = format_tooltip_short(&target.points[index], &config.unit);
        let size = tooltip_size(target.measure, &text, config);
        self.tooltip.rect = Rect::from_origin_size(Point::new(pointer.x + 10.0, pointer.y - 10.0), size);
        self.tooltip.text = text;
        if !self.tooltip.animator.is_visible() {
            events.push(ChartEvent::TooltipShown);
        }
        self.tooltip.animator.show_now();
    }

    pub fn pointer_left(&mut self, config: &ChartConfig, now: Instant, events: &mut Vec<ChartEvent>) {
        self.hide_highlight(events);
        match config.mode {
            InteractionMode::Threshold => {
                if self.tooltip.animator.hide(now) {
                    events.push(ChartEvent::TooltipFadeOutStarted);
                }
            }
            InteractionMode::AlwaysOn => {
                if self.tooltip.animator.is_visible() {
                    self.tooltip.animator.hide_now();
                    events.push(ChartEvent::TooltipHidden);
                }
            }
        }
    }

    /// Settle finished fades. Returns `true` while anything still animates.
    pub fn tick(&mut self, now: Instant, events: &mut Vec<ChartEvent>) -> bool {
        if let Some(TooltipTransition::FadeOutCompleted) = self.tooltip.animator.tick(now) {
            events.push(ChartEvent::TooltipHidden);
        }
        self.highlight.pulse.is_running() || self.tooltip.animator.is_animating()
    }

    /// Drop highlight and tooltip without animating.
    pub fn reset(&mut self) {
        self.highlight.pulse.stop();
        self.highlight.visible = false;
        self.highlight.index = None;
        self.tooltip.animator.hide_now();
    }

    /// Copy the current state into the scene's overlay nodes.
    pub fn sync(&self, scene: &mut Scene, now: Instant) {
        if let Some(h) = scene.highlight_mut() {
            h.center = self.highlight.center;
            h.visible = self.highlight.visible;
            h.opacity = self.highlight.pulse.opacity(now);
        }
        if let Some(t) = scene.tooltip_mut() {
            t.rect = self.tooltip.rect;
            t.text.clone_from(&self.tooltip.text);
            t.visible = self.tooltip.animator.is_visible();
            t.opacity = self.tooltip.animator.opacity(now);
        }
    }

    fn hide_highlight(&mut self, events: &mut Vec<ChartEvent>) {
        self.highlight.pulse.stop();
        self.highlight.index = None;
        if self.highlight.visible {
            self.highlight.visible = false;
            events.push(ChartEvent::HighlightHidden);
        }
    }
}

/// Panel size: measured text plus padding on every side.
pub fn tooltip_size(measure: &dyn TextMeasure, text: &str, config: &ChartConfig) -> Size {
    let inner = measure.measure(text, config.tooltip_font_size);
    let pad = config.tooltip_padding * 2.0;
    Size::new(inner.width + pad, inner.height + pad)
}
