// File: crates/forecast-demo/src/main.rs
// Summary: Loads a forecast CSV (or a synthetic stand-in) and renders idle, hovered and always-on chart PNGs.
//
// Usage: forecast-demo [CSV_PATH] [THEME] [OUT_DIR]

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use forecast_chart::theme;
use forecast_chart::{
    Chart, ChartConfig, ChartPoint, ChartSeries, InteractionMode, RenderOptions, SkiaTextMeasure, Theme,
};
use forecast_demo::{init_logging, load_forecast_csv, resolve_path, synthetic_forecast, Forecast};
use tracing::{info, warn};

fn main() -> Result<()> {
    init_logging();

    let mut args = std::env::args().skip(1);
    let raw = args.next().unwrap_or_else(|| "data/sample_precip.csv".to_string());
    let theme = theme::find(&args.next().unwrap_or_else(|| "dark".to_string()));
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "target/out".to_string()));

    let forecast = match resolve_path(&raw) {
        Some(path) => load_forecast_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?,
        None => {
            warn!(path = %raw, "input not found; using synthetic forecast");
            let start = NaiveDate::from_ymd_opt(2026, 1, 12)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .context("synthetic start time")?;
            synthetic_forecast(start, 24)
        }
    };
    if forecast.precip.len() < 2 {
        anyhow::bail!("need at least two forecast rows, got {}", forecast.precip.len());
    }
    std::fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    let opts = RenderOptions::from_theme(&theme);

    // 1) Idle
    let mut chart = build_chart(&forecast, theme, InteractionMode::Threshold);
    write_png(&chart, &opts, &out_dir.join(format!("forecast_{}_idle.png", theme.name)))?;

    // 2) Hovered over the wettest point, after the tooltip fade-in
    let peak = wettest(&forecast.precip);
    let mapper = chart.mapper().context("primary series is not drawable")?;
    let anchor = mapper.to_screen(peak);
    let t0 = Instant::now();
    chart.pointer_moved(anchor.x, anchor.y + 4.0, t0);
    chart.tick(t0 + chart.config().timings.fade_in);
    for ev in chart.take_events() {
        info!(?ev, "chart event");
    }
    write_png(&chart, &opts, &out_dir.join(format!("forecast_{}_hover.png", theme.name)))?;

    // 3) Always-on tooltip mode, pointer mid-plot
    let mut always = build_chart(&forecast, theme, InteractionMode::AlwaysOn);
    let plot = mapper.plot_rect();
    always.pointer_moved(plot.center_x(), plot.top + plot.height() * 0.6, t0);
    write_png(&always, &opts, &out_dir.join(format!("forecast_{}_always_on.png", theme.name)))?;

    Ok(())
}

fn build_chart(forecast: &Forecast, theme: Theme, mode: InteractionMode) -> Chart {
    let config = ChartConfig::default().with_theme(theme).with_mode(mode);
    let mut chart = Chart::new(config).with_measure(SkiaTextMeasure::new());
    let mut series = vec![ChartSeries::new(forecast.precip.clone())];
    if forecast.probability.len() >= 2 {
        // Probability self-scales against its own maximum.
        series.push(ChartSeries::new(forecast.probability.clone()).with_stroke(theme.highlight.with_a(140), 1.5));
    }
    chart.set_series(series);
    chart
}

fn wettest(points: &[ChartPoint]) -> &ChartPoint {
    points
        .iter()
        .fold(&points[0], |best, p| if p.value > best.value { p } else { best })
}

fn write_png(chart: &Chart, opts: &RenderOptions, path: &Path) -> Result<()> {
    chart
        .render_to_png(opts, path)
        .with_context(|| format!("rendering {}", path.display()))?;
    info!(path = %path.display(), "wrote");
    Ok(())
}
