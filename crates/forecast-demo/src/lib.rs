// File: crates/forecast-demo/src/lib.rs
// Summary: Forecast data loading shared by the headless demo and the window host.

pub mod loader;

pub use loader::{load_forecast_csv, parse_valid_time, resolve_path, synthetic_forecast, Forecast};

/// Install a `tracing` subscriber honouring `RUST_LOG` (default `info`).
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
