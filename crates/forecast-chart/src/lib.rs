// File: crates/forecast-chart/src/lib.rs
// Summary: Core library entry point; exports the time-series chart widget and its raster backend.

pub mod animation;
pub mod chart;
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod interaction;
pub mod raster;
pub mod render;
pub mod scale;
pub mod scene;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;
pub mod units;

pub use animation::{Easing, Pulse, TooltipAnimator, TooltipPhase, Tween};
pub use chart::Chart;
pub use config::{AnimationTimings, ChartConfig, InteractionMode};
pub use error::ChartError;
pub use geometry::{Point, Rect, Size};
pub use interaction::ChartEvent;
pub use raster::{RenderOptions, SkiaTextMeasure};
pub use scale::{safe_max, PlotMapper, ViewportBounds};
pub use scene::Scene;
pub use series::ChartSeries;
pub use theme::Theme;
pub use types::{ChartPoint, Insets};
