// File: crates/forecast-chart/tests/units.rs
// Purpose: Unit conversions and the formatted strings used for precipitation labels.

use forecast_chart::units::{
    inches_range_formatted, inches_to_mm, less_than_inches_formatted, meters_to_feet, mm_to_inches,
    mm_to_inches_formatted,
};

#[test]
fn mm_inch_conversions() {
    assert!((mm_to_inches(25.4) - 1.0).abs() < 1e-12);
    assert!((inches_to_mm(0.5) - 12.7).abs() < 1e-12);
    assert!((mm_to_inches(inches_to_mm(3.3)) - 3.3).abs() < 1e-12);
}

#[test]
fn missing_elevation_is_zero_feet() {
    assert_eq!(meters_to_feet(None), 0.0);
    assert!((meters_to_feet(Some(100.0)) - 328.084).abs() < 1e-9);
}

#[test]
fn formatted_strings() {
    assert_eq!(mm_to_inches_formatted(12.7, 1), "0.5 inch");
    assert_eq!(inches_range_formatted(2.0, 4.0, 1), "2.0 - 4.0 inches");
    assert_eq!(less_than_inches_formatted(0.5, 1), "< 0.5 inch");
    assert_eq!(less_than_inches_formatted(0.25, 2), "< 0.25 inch");
}
