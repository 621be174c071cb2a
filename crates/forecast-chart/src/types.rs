// File: crates/forecast-chart/src/types.rs
// Summary: Shared types and constants (data points, margins, fixed layout numbers).

use chrono::{DateTime, NaiveDateTime};

/// Default surface width in pixels.
pub const WIDTH: i32 = 640;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 280;

/// Number of gridline steps along each axis (lines drawn = steps + 1).
pub const GRID_STEPS: usize = 6;
/// Maximum vertical pixel distance for a point to count as hovered.
pub const HIT_THRESHOLD_PX: f64 = 20.0;

/// One sample of a time series.
///
/// Points are immutable once handed to a series and are expected in
/// ascending time order; nothing in the chart sorts them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartPoint {
    pub time: NaiveDateTime,
    pub value: f64,
}

impl ChartPoint {
    pub const fn new(time: NaiveDateTime, value: f64) -> Self {
        Self { time, value }
    }

    /// Time as a linear coordinate (milliseconds since the Unix epoch).
    #[inline]
    pub fn x(&self) -> f64 {
        time_to_x(self.time)
    }
}

#[inline]
pub fn time_to_x(time: NaiveDateTime) -> f64 {
    time.and_utc().timestamp_millis() as f64
}

/// Inverse of [`time_to_x`]; out-of-range coordinates saturate to the epoch.
pub fn x_to_time(x: f64) -> NaiveDateTime {
    DateTime::from_timestamp_millis(x.round() as i64)
        .unwrap_or_default()
        .naive_utc()
}

/// Screen margins around the plot rectangle, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    /// Room for Y labels on the left and two-line time labels at the bottom.
    fn default() -> Self {
        Self::new(40, 10, 10, 30)
    }
}
