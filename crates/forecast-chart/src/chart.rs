// File: crates/forecast-chart/src/chart.rs
// Summary: The chart component: owns series, cached viewport, scene and interaction state; routes host events.

use std::time::Instant;

use tracing::debug;

use crate::config::ChartConfig;
use crate::geometry::{Point, Size};
use crate::interaction::{ChartEvent, HitTarget, InteractionEngine};
use crate::render::build_frame;
use crate::scale::{PlotMapper, ViewportBounds};
use crate::scene::Scene;
use crate::series::ChartSeries;
use crate::text::{ApproxTextMeasure, TextMeasure};
use crate::types::{HEIGHT, WIDTH};

/// An embeddable time-series chart.
///
/// Data flows in through [`Chart::set_series`]; every data change or resize
/// triggers a full redraw, and a data change also releases any hovered point.
/// Pointer events are tested against the viewport
/// cached by the most recent redraw. Animations advance only when the host
/// calls [`Chart::tick`] from its frame scheduler.
pub struct Chart {
    series: Vec<ChartSeries>,
    config: ChartConfig,
    size: Size,
    viewport: Option<ViewportBounds>,
    scene: Scene,
    engine: InteractionEngine,
    visible: bool,
    measure: Box<dyn TextMeasure>,
    events: Vec<ChartEvent>,
    clock: Instant,
}

impl Chart {
    pub fn new(config: ChartConfig) -> Self {
        let engine = InteractionEngine::new(&config);
        Self {
            series: Vec::new(),
            config,
            size: Size::new(WIDTH as f64, HEIGHT as f64),
            viewport: None,
            scene: Scene::new(),
            engine,
            visible: true,
            measure: Box::new(ApproxTextMeasure::default()),
            events: Vec::new(),
            clock: Instant::now(),
        }
    }

    /// Replace the text measurer used to size the tooltip.
    pub fn with_measure(mut self, measure: impl TextMeasure + 'static) -> Self {
        self.measure = Box::new(measure);
        self
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn series(&self) -> &[ChartSeries] {
        &self.series
    }

    /// Replace all series; the first one is the primary.
    pub fn set_series(&mut self, series: Vec<ChartSeries>) {
        self.series = series;
        self.release_hover();
        self.redraw();
    }

    pub fn add_series(&mut self, series: ChartSeries) {
        self.series.push(series);
        self.release_hover();
        self.redraw();
    }

    /// Highlight and tooltip refer to the old points; hide them as a pointer leave would.
    fn release_hover(&mut self) {
        self.engine.pointer_left(&self.config, self.clock, &mut self.events);
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.size = Size::new(width.max(0.0), height.max(0.0));
        self.redraw();
    }

    /// Rebuild the scene and replace the cached viewport. Safe to call at any time;
    /// with no drawable primary series the scene is simply cleared.
    pub fn redraw(&mut self) {
        let frame = build_frame(&self.series, self.size, &self.config);
        self.scene = frame.scene;
        self.viewport = frame.viewport;
        self.engine.sync(&mut self.scene, self.clock);
    }

    /// Viewport of the primary series as of the last redraw.
    pub fn viewport(&self) -> Option<ViewportBounds> {
        self.viewport
    }

    /// Mapper over the cached viewport and current size.
    pub fn mapper(&self) -> Option<PlotMapper> {
        self.viewport.map(|v| PlotMapper::new(v, self.size, &self.config.insets))
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn interaction(&self) -> &InteractionEngine {
        &self.engine
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64, now: Instant) {
        self.clock = now;
        if !self.visible {
            return;
        }
        let Some(mapper) = self.mapper() else { return };
        let Some(primary) = self.series.first().filter(|s| s.is_drawable()) else { return };
        let target = HitTarget {
            points: &primary.points,
            mapper: &mapper,
            widget: self.size,
            measure: self.measure.as_ref(),
        };
        self.engine.pointer_moved(&self.config, &target, Point::new(x, y), now, &mut self.events);
        self.engine.sync(&mut self.scene, now);
    }

    pub fn pointer_left(&mut self, now: Instant) {
        self.clock = now;
        self.engine.pointer_left(&self.config, now, &mut self.events);
        self.engine.sync(&mut self.scene, now);
    }

    /// Advance animations to `now`. Returns `true` while another frame is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.clock = now;
        let busy = self.engine.tick(now, &mut self.events);
        self.engine.sync(&mut self.scene, now);
        busy
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the whole chart. Revealing triggers one redraw.
    pub fn toggle_visibility(&mut self) -> bool {
        self.visible = !self.visible;
        if self.visible {
            self.redraw();
        } else {
            self.engine.reset();
            self.engine.sync(&mut self.scene, self.clock);
        }
        debug!(visible = self.visible, "chart visibility toggled");
        self.events.push(ChartEvent::VisibilityChanged { visible: self.visible });
        self.visible
    }

    /// Label for a host button that toggles the chart.
    pub fn toggle_label(&self) -> &'static str {
        if self.visible { "Hide chart" } else { "Show chart" }
    }

    /// Drain visibility side effects accumulated since the last call.
    pub fn take_events(&mut self) -> Vec<ChartEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new(ChartConfig::default())
    }
}
