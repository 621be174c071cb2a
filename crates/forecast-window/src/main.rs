// File: crates/forecast-window/src/main.rs
// Summary: Windowed host that blits the chart via softbuffer, forwards pointer events and drives the animation clock.
//
// Usage: forecast-window [CSV_PATH] [THEME]
// Space toggles the chart; the window title shows the toggle label.

use std::num::NonZeroU32;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use forecast_chart::theme;
use forecast_chart::{Chart, ChartConfig, ChartSeries, RenderOptions, SkiaTextMeasure};
use forecast_demo::{init_logging, load_forecast_csv, resolve_path, synthetic_forecast, Forecast};
use tracing::{debug, error, warn};
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::WindowBuilder;

const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    init_logging();

    let mut args = std::env::args().skip(1);
    let raw = args.next().unwrap_or_else(|| "data/sample_precip.csv".to_string());
    let theme = theme::find(&args.next().unwrap_or_else(|| "dark".to_string()));
    let forecast = load(&raw)?;

    let mut chart = Chart::new(ChartConfig::default().with_theme(theme)).with_measure(SkiaTextMeasure::new());
    let mut series = vec![ChartSeries::new(forecast.precip)];
    if forecast.probability.len() >= 2 {
        series.push(ChartSeries::new(forecast.probability).with_stroke(theme.highlight.with_a(140), 1.5));
    }
    chart.set_series(series);
    let opts = RenderOptions::from_theme(&theme);

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(title(&chart))
        .with_inner_size(winit::dpi::PhysicalSize::new(chart.size().width as u32, chart.size().height as u32))
        .build(&event_loop)
        .context("build window")?;

    // SAFETY: `run` never returns, so the window outlives the context and surface.
    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    event_loop.run(move |event, _, cf| {
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => cf.set_exit(),
                WindowEvent::Resized(size) => {
                    chart.resize(size.width as f64, size.height as f64);
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    chart.pointer_moved(position.x, position.y, Instant::now());
                    window.request_redraw();
                }
                WindowEvent::CursorLeft { .. } => {
                    chart.pointer_left(Instant::now());
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(VirtualKeyCode::Space), .. },
                    ..
                } => {
                    chart.toggle_visibility();
                    window.set_title(&title(&chart));
                    window.request_redraw();
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                // Keep ticking while a fade or the pulse is running.
                if chart.tick(Instant::now()) {
                    window.request_redraw();
                    cf.set_wait_until(Instant::now() + FRAME);
                } else {
                    cf.set_wait();
                }
            }
            Event::RedrawRequested(_) => {
                if let Err(e) = present(&mut surface, &chart, &opts) {
                    error!("present failed: {e:#}");
                }
            }
            _ => {}
        }
        for ev in chart.take_events() {
            debug!(?ev, "chart event");
        }
    });
}

fn load(raw: &str) -> Result<Forecast> {
    if let Some(path) = resolve_path(raw) {
        return load_forecast_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()));
    }
    warn!(path = %raw, "input not found; using synthetic forecast");
    let start = NaiveDate::from_ymd_opt(2026, 1, 12)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .context("synthetic start time")?;
    Ok(synthetic_forecast(start, 24))
}

fn title(chart: &Chart) -> String {
    format!("Forecast chart (Space: {})", chart.toggle_label())
}

/// Render the chart (or just the background while hidden) and blit it as 0RGB.
fn present(surface: &mut softbuffer::Surface, chart: &Chart, opts: &RenderOptions) -> Result<()> {
    let size = chart.size();
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width as u32), NonZeroU32::new(size.height as u32)) else {
        return Ok(());
    };
    surface.resize(w, h).map_err(|e| anyhow!("resize: {e}"))?;
    let mut frame = surface.buffer_mut().map_err(|e| anyhow!("buffer: {e}"))?;

    if chart.is_visible() {
        let (rgba, _, _, _) = chart.render_to_rgba8(opts)?;
        for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
            *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
        }
    } else {
        let bg = opts.background;
        frame.fill((bg.r() as u32) << 16 | (bg.g() as u32) << 8 | bg.b() as u32);
    }
    frame.present().map_err(|e| anyhow!("present: {e}"))?;
    Ok(())
}
