// File: crates/forecast-chart/src/error.rs
// Summary: Error type for raster output. Scene building and interaction never fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("failed to read back surface pixels")]
    ReadPixels,
    #[error("pixel buffer does not match {width}x{height}")]
    BufferSize { width: u32, height: u32 },
    #[error("PNG encode failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
