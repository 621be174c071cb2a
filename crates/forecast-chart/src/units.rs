// File: crates/forecast-chart/src/units.rs
// Summary: Precipitation/elevation unit helpers used when preparing series and labels.

pub const MM_PER_INCH: f64 = 25.4;
pub const FEET_PER_METER: f64 = 3.28084;

pub fn mm_to_inches(mm: f64) -> f64 { mm / MM_PER_INCH }
pub fn inches_to_mm(inches: f64) -> f64 { inches * MM_PER_INCH }

/// Missing elevations count as zero.
pub fn meters_to_feet(meters: Option<f64>) -> f64 {
    meters.unwrap_or(0.0) * FEET_PER_METER
}

fn round_to(v: f64, decimals: u32) -> f64 {
    let f = 10f64.powi(decimals as i32);
    (v * f).round() / f
}

/// `12.7 mm` -> `"0.5 inch"`.
pub fn mm_to_inches_formatted(mm: f64, decimals: u32) -> String {
    format!("{} inch", round_to(mm_to_inches(mm), decimals))
}

/// `(2, 4)` -> `"2.0 - 4.0 inches"` at one decimal.
pub fn inches_range_formatted(low: f64, high: f64, decimals: u32) -> String {
    let d = decimals as usize;
    format!("{:.d$} - {:.d$} inches", round_to(low, decimals), round_to(high, decimals))
}

/// `0.5` -> `"< 0.5 inch"`.
pub fn less_than_inches_formatted(inches: f64, decimals: u32) -> String {
    let d = decimals as usize;
    format!("< {:.d$} inch", round_to(inches, decimals))
}
