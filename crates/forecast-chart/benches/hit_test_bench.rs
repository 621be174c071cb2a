// File: crates/forecast-chart/benches/hit_test_bench.rs
// Summary: Criterion benches for nearest-point lookup and a pointer sweep with animation ticks.

use std::time::{Duration as StdDuration, Instant};

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use forecast_chart::interaction::nearest_point;
use forecast_chart::{Chart, ChartConfig, ChartPoint, ChartSeries};

fn hourly_points(n: usize) -> Vec<ChartPoint> {
    let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    (0..n)
        .map(|i| ChartPoint::new(start + Duration::hours(i as i64), (i % 7) as f64 * 0.1))
        .collect()
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_point");
    for &n in &[56usize, 1_000, 10_000] {
        let mut chart = Chart::new(ChartConfig::default());
        chart.set_series(vec![ChartSeries::new(hourly_points(n))]);
        let mapper = chart.mapper().expect("drawable series");
        let points = chart.series()[0].points.clone();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(nearest_point(&points, &mapper, black_box(321.5))));
        });
    }
    group.finish();
}

fn bench_pointer_sweep(c: &mut Criterion) {
    c.bench_function("pointer_sweep_56", |b| {
        let mut chart = Chart::new(ChartConfig::default());
        chart.set_series(vec![ChartSeries::new(hourly_points(56))]);
        let t0 = Instant::now();
        b.iter(|| {
            for step in 0..64u64 {
                let x = 40.0 + step as f64 * 9.0;
                let now = t0 + StdDuration::from_millis(step * 16);
                chart.pointer_moved(x, 150.0, now);
                chart.tick(now);
            }
            black_box(chart.take_events());
        });
    });
}

criterion_group!(benches, bench_nearest, bench_pointer_sweep);
criterion_main!(benches);
