// File: crates/forecast-chart/tests/interaction.rs
// Purpose: Pointer hit-testing, highlight/tooltip visibility, tooltip placement and fade idempotence.

use std::time::{Duration, Instant};

use chrono::{NaiveDate, NaiveDateTime};
use forecast_chart::interaction::{nearest_point, tooltip_left, tooltip_top};
use forecast_chart::{
    Chart, ChartConfig, ChartEvent, ChartPoint, ChartSeries, Insets, InteractionMode, PlotMapper, Size,
    TooltipPhase, ViewportBounds,
};

fn at(h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 12).unwrap().and_hms_opt(h, 0, 0).unwrap()
}

fn precip_points() -> Vec<ChartPoint> {
    vec![
        ChartPoint::new(at(3), 0.0),
        ChartPoint::new(at(6), 0.5),
        ChartPoint::new(at(9), 0.1),
    ]
}

fn chart(config: ChartConfig) -> Chart {
    let mut c = Chart::new(config);
    c.resize(300.0, 200.0);
    c.set_series(vec![ChartSeries::new(precip_points())]);
    c
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn nearest_point_prefers_first_on_ties() {
    let pts = vec![ChartPoint::new(at(3), 1.0), ChartPoint::new(at(9), 1.0)];
    let m = PlotMapper::new(ViewportBounds::from_points(&pts).unwrap(), Size::new(300.0, 200.0), &Insets::default());
    // 165 is exactly halfway between x=40 and x=290.
    assert_eq!(nearest_point(&pts, &m, 165.0), Some(0));
    assert_eq!(nearest_point(&pts, &m, 166.0), Some(1));
    assert_eq!(nearest_point(&[], &m, 10.0), None);
}

#[test]
fn tooltip_flips_when_it_would_overflow() {
    assert_eq!(tooltip_left(100.0, 80.0, 300.0, 20.0, 10.0), 120.0);
    assert_eq!(tooltip_left(200.0, 80.0, 300.0, 20.0, 10.0), 220.0);
    assert_eq!(tooltip_left(250.0, 80.0, 300.0, 20.0, 10.0), 160.0);
    assert_eq!(tooltip_top(100.0, 40.0, 16.0), 76.0);
}

#[test]
fn pointer_near_point_shows_highlight_and_tooltip() {
    let mut c = chart(ChartConfig::default());
    let t0 = Instant::now();
    c.pointer_moved(165.0, 15.0, t0);

    assert_eq!(
        c.take_events(),
        vec![ChartEvent::HighlightShown { index: 1 }, ChartEvent::TooltipFadeInStarted]
    );

    let h = c.scene().highlight().unwrap();
    assert!(h.visible);
    assert!((h.center.x - 165.0).abs() < 1e-9 && (h.center.y - 10.0).abs() < 1e-9);

    let t = c.scene().tooltip().unwrap();
    assert!(t.visible);
    assert_eq!(t.text, "01/12 6:00 AM\n0.50 inches");
    // 13 glyphs * 12px * 0.6 + 2 * 6px padding.
    assert!((t.rect.width() - 105.6).abs() < 1e-3);
    assert!((t.rect.left - 185.0).abs() < 1e-9);
    assert!((t.rect.bottom - 31.0).abs() < 1e-6, "bottom sits just below the pointer");
}

#[test]
fn tooltip_near_right_edge_flips_left() {
    let mut c = chart(ChartConfig::default());
    c.pointer_moved(290.0, 140.0, Instant::now());
    let t = c.scene().tooltip().unwrap();
    assert!((t.rect.left - (290.0 - 105.6 - 10.0)).abs() < 1e-3);
}

#[test]
fn staying_on_the_line_does_not_restart_pulse() {
    let mut c = chart(ChartConfig::default());
    let t0 = Instant::now();
    c.pointer_moved(165.0, 15.0, t0);
    c.take_events();

    c.pointer_moved(170.0, 12.0, t0 + ms(300));
    assert!(c.take_events().is_empty(), "no new visibility transitions");
    let pulse = c.interaction().highlight.pulse;
    assert!((pulse.opacity(t0 + ms(600)) - 0.3).abs() < 1e-9, "pulse still phased from first show");
}

#[test]
fn moving_away_fades_out_exactly_once() {
    let mut c = chart(ChartConfig::default());
    let t0 = Instant::now();
    c.pointer_moved(165.0, 15.0, t0);
    c.tick(t0 + ms(600));
    c.take_events();

    c.pointer_moved(165.0, 120.0, t0 + ms(700));
    assert_eq!(
        c.take_events(),
        vec![ChartEvent::HighlightHidden, ChartEvent::TooltipFadeOutStarted]
    );
    assert!((c.interaction().highlight.pulse.opacity(t0 + ms(700)) - 1.0).abs() < 1e-9);

    c.pointer_moved(160.0, 125.0, t0 + ms(750));
    assert!(c.take_events().is_empty(), "second far move starts nothing");
    assert!(c.interaction().tooltip.animator.is_fading_out());

    c.tick(t0 + ms(800));
    assert!(c.take_events().is_empty());
    c.tick(t0 + ms(900));
    assert_eq!(c.take_events(), vec![ChartEvent::TooltipHidden]);
    assert_eq!(c.interaction().tooltip.animator.phase(), TooltipPhase::Hidden);
    assert!(!c.scene().tooltip().unwrap().visible);
}

#[test]
fn pointer_leave_hides_everything() {
    let mut c = chart(ChartConfig::default());
    let t0 = Instant::now();
    c.pointer_moved(165.0, 15.0, t0);
    c.take_events();

    c.pointer_left(t0 + ms(100));
    assert_eq!(
        c.take_events(),
        vec![ChartEvent::HighlightHidden, ChartEvent::TooltipFadeOutStarted]
    );
    assert!(!c.scene().highlight().unwrap().visible);
    assert!(!c.interaction().highlight.pulse.is_running());

    c.pointer_left(t0 + ms(150));
    assert!(c.take_events().is_empty());
}

#[test]
fn always_on_mode_ignores_threshold() {
    let mut c = chart(ChartConfig::default().with_mode(InteractionMode::AlwaysOn));
    let t0 = Instant::now();
    c.pointer_moved(165.0, 150.0, t0);

    assert_eq!(c.take_events(), vec![ChartEvent::TooltipShown]);
    let t = c.scene().tooltip().unwrap();
    assert!(t.visible);
    assert!((t.opacity - 1.0).abs() < 1e-9, "no fade-in");
    assert_eq!(t.text, "6:00 AM\n0.50 inches");
    assert_eq!((t.rect.left, t.rect.top), (175.0, 140.0));
    assert!(!c.scene().highlight().unwrap().visible);

    c.pointer_moved(60.0, 150.0, t0 + ms(10));
    assert!(c.take_events().is_empty());

    c.pointer_left(t0 + ms(20));
    assert_eq!(c.take_events(), vec![ChartEvent::TooltipHidden]);
}

#[test]
fn pointer_without_data_is_a_no_op() {
    let mut c = Chart::new(ChartConfig::default());
    c.pointer_moved(100.0, 100.0, Instant::now());
    assert!(c.take_events().is_empty());

    c.set_series(vec![ChartSeries::new(vec![ChartPoint::new(at(1), 1.0)])]);
    c.pointer_moved(100.0, 100.0, Instant::now());
    assert!(c.take_events().is_empty());
}

#[test]
fn hidden_chart_ignores_pointer_and_reveal_redraws() {
    let mut c = chart(ChartConfig::default());
    assert_eq!(c.toggle_label(), "Hide chart");

    assert!(!c.toggle_visibility());
    assert_eq!(c.toggle_label(), "Show chart");
    c.pointer_moved(165.0, 15.0, Instant::now());
    assert_eq!(c.take_events(), vec![ChartEvent::VisibilityChanged { visible: false }]);

    c.resize(400.0, 200.0);
    assert!(c.toggle_visibility());
    assert_eq!(c.take_events(), vec![ChartEvent::VisibilityChanged { visible: true }]);
    assert_eq!(c.scene().polylines().count(), 1);
}

#[test]
fn threshold_is_inclusive() {
    // Point 1 sits at y=10; 20px below is still a hit.
    let mut c = chart(ChartConfig::default());
    c.pointer_moved(165.0, 30.0, Instant::now());
    assert_eq!(
        c.take_events(),
        vec![ChartEvent::HighlightShown { index: 1 }, ChartEvent::TooltipFadeInStarted]
    );

    let mut c = chart(ChartConfig::default());
    c.pointer_moved(165.0, 30.001, Instant::now());
    assert!(c.take_events().is_empty());
    assert!(!c.scene().highlight().unwrap().visible);
}

#[test]
fn clearing_data_while_hovered_stops_animating() {
    let mut c = chart(ChartConfig::default());
    let t0 = Instant::now();
    c.pointer_moved(165.0, 15.0, t0);
    c.take_events();

    c.set_series(Vec::new());
    assert_eq!(
        c.take_events(),
        vec![ChartEvent::HighlightHidden, ChartEvent::TooltipFadeOutStarted]
    );
    assert!(!c.interaction().highlight.pulse.is_running());
    assert!(!c.tick(t0 + ms(200)), "nothing left to animate");
    assert_eq!(c.take_events(), vec![ChartEvent::TooltipHidden]);
}

#[test]
fn new_data_does_not_inherit_old_overlays() {
    let mut c = chart(ChartConfig::default());
    let t0 = Instant::now();
    c.pointer_moved(165.0, 15.0, t0);
    c.tick(t0 + ms(600));
    c.take_events();

    c.set_series(vec![ChartSeries::new(vec![
        ChartPoint::new(at(12), 2.0),
        ChartPoint::new(at(15), 0.0),
    ])]);
    assert!(!c.scene().highlight().unwrap().visible);
    assert_eq!(c.interaction().highlight.index, None);

    c.tick(t0 + ms(800));
    assert!(!c.scene().tooltip().unwrap().visible);
    assert_eq!(
        c.take_events(),
        vec![ChartEvent::HighlightHidden, ChartEvent::TooltipFadeOutStarted, ChartEvent::TooltipHidden]
    );

    c.add_series(ChartSeries::new(vec![ChartPoint::new(at(12), 5.0), ChartPoint::new(at(13), 6.0)]));
    assert!(c.take_events().is_empty(), "nothing hovered, nothing to release");
}
