// File: crates/forecast-chart/benches/render_bench.rs
// Summary: Criterion benches for scene building and full PNG rendering.

use anyhow::Result;
use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use forecast_chart::render::build_frame;
use forecast_chart::{Chart, ChartConfig, ChartPoint, ChartSeries, RenderOptions, Size};

fn hourly_series(n: usize) -> ChartSeries {
    let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    let points = (0..n)
        .map(|i| {
            let v = ((i as f64 * 0.05).sin() * 0.4 + 0.4).max(0.0);
            ChartPoint::new(start + Duration::hours(i as i64), v)
        })
        .collect();
    ChartSeries::new(points)
}

fn bench_build_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_frame");
    let config = ChartConfig::default();
    for &n in &[56usize, 1_000, 10_000] {
        let series = vec![hourly_series(n)];
        group.bench_function(format!("points_{n}"), |b| {
            b.iter(|| black_box(build_frame(&series, Size::new(640.0, 280.0), &config)));
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[56usize, 10_000] {
        group.bench_function(format!("points_{n}"), |b| {
            let mut chart = Chart::new(ChartConfig::default());
            chart.resize(800.0, 500.0);
            chart.set_series(vec![hourly_series(n)]);
            let mut opts = RenderOptions::default();
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = chart.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build_frame, bench_render);
criterion_main!(benches);
