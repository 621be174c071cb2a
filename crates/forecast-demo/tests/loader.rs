// File: crates/forecast-demo/tests/loader.rs
// Purpose: Valid-time parsing variants and CSV loading with unit conversion.

use chrono::{NaiveDate, NaiveDateTime};
use forecast_demo::{load_forecast_csv, parse_valid_time, synthetic_forecast};

fn dt(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 12).unwrap().and_hms_opt(h, m, 0).unwrap()
}

#[test]
fn parses_rfc3339_with_duration_suffix() {
    assert_eq!(parse_valid_time("2026-01-12T03:00:00+00:00/PT3H"), Some(dt(3, 0)));
    assert_eq!(parse_valid_time("2026-01-12T05:00:00+02:00"), Some(dt(3, 0)), "offset normalised to UTC");
}

#[test]
fn parses_plain_and_epoch_forms() {
    assert_eq!(parse_valid_time("2026-01-12 06:30"), Some(dt(6, 30)));
    let secs = dt(9, 0).and_utc().timestamp();
    assert_eq!(parse_valid_time(&secs.to_string()), Some(dt(9, 0)));
    assert_eq!(parse_valid_time(&(secs * 1000).to_string()), Some(dt(9, 0)));
    assert_eq!(parse_valid_time("  "), None);
    assert_eq!(parse_valid_time("tomorrow"), None);
}

#[test]
fn loads_csv_converting_mm_to_inches() {
    let dir = std::path::PathBuf::from("target/test_out");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("loader_mm.csv");
    std::fs::write(
        &path,
        "valid_time,precip_mm,pop\n\
         2026-01-12T03:00:00+00:00/PT3H,25.4,40\n\
         garbage,1.0,10\n\
         2026-01-12T06:00:00+00:00/PT3H,12.7,\n",
    )
    .unwrap();

    let f = load_forecast_csv(&path).expect("load");
    assert_eq!(f.precip.len(), 2, "bad time row skipped");
    assert_eq!(f.precip[0].time, dt(3, 0));
    assert!((f.precip[0].value - 1.0).abs() < 1e-12);
    assert!((f.precip[1].value - 0.5).abs() < 1e-12);
    assert_eq!(f.probability.len(), 1, "blank probability is not a point");
}

#[test]
fn csv_without_amount_column_is_rejected() {
    let path = std::path::PathBuf::from("target/test_out/loader_bad.csv");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "time,wind\n2026-01-12 03:00,4\n").unwrap();
    assert!(load_forecast_csv(&path).is_err());
}

#[test]
fn synthetic_forecast_is_three_hourly_and_non_negative() {
    let f = synthetic_forecast(dt(0, 0), 8);
    assert_eq!(f.precip.len(), 8);
    assert_eq!(f.precip[1].time, dt(3, 0));
    assert!(f.precip.iter().all(|p| p.value >= 0.0));
    assert!(f.probability.iter().all(|p| (0.0..=100.0).contains(&p.value)));
}
