// File: crates/forecast-demo/src/loader.rs
// Summary: Loads forecast CSV rows (valid time, precipitation, probability) into chart points.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, NaiveDateTime};
use forecast_chart::units::mm_to_inches;
use forecast_chart::ChartPoint;
use tracing::{debug, info, warn};

/// Precipitation amounts (inches) and, when present, probability of precipitation (%).
#[derive(Clone, Debug, Default)]
pub struct Forecast {
    pub precip: Vec<ChartPoint>,
    pub probability: Vec<ChartPoint>,
}

/// Resolve path, trying .csv/.cvs swap if needed.
pub fn resolve_path(raw: &str) -> Option<PathBuf> {
    let p = Path::new(raw);
    if p.exists() {
        return Some(p.to_path_buf());
    }
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    let mut alt = p.to_path_buf();
    match ext.as_str() {
        "cvs" => alt.set_extension("csv"),
        "csv" => alt.set_extension("cvs"),
        _ => return None,
    };
    alt.exists().then_some(alt)
}

/// Parse a forecast valid time.
///
/// Accepts RFC 3339 with an optional ISO-8601 duration suffix
/// (`2026-01-12T03:00:00+00:00/PT3H`, the suffix is dropped),
/// `YYYY-MM-DD HH:MM`, or epoch seconds (milliseconds above 1e12).
/// Offsets are normalised to UTC.
pub fn parse_valid_time(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    let start = s.split('/').next().unwrap_or(s);
    if let Ok(dt) = DateTime::parse_from_rfc3339(start) {
        return Some(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(start, fmt) {
            return Some(dt);
        }
    }
    let n = start.parse::<i64>().ok()?;
    let dt = if n > 10_i64.pow(12) { DateTime::from_timestamp_millis(n) } else { DateTime::from_timestamp(n, 0) };
    dt.map(|d| d.naive_utc())
}

/// Load a forecast CSV with headers.
///
/// Recognised columns: time (`valid_time`, `time`, `timestamp`, `date`, `datetime`),
/// precipitation in millimetres (`precip_mm`, `qpf_mm`, `mm`) or inches
/// (`precip_in`, `inches`, `value`), and probability (`pop`, `probability`).
/// Rows with an unparseable time or amount are skipped.
pub fn load_forecast_csv(path: &Path) -> Result<Forecast> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_lowercase()).collect::<Vec<_>>();
    debug!(?headers, "forecast csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let Some(i_time) = idx(&["valid_time", "time", "timestamp", "date", "datetime"]) else {
        anyhow::bail!("no time column in {}", path.display());
    };
    let i_mm = idx(&["precip_mm", "qpf_mm", "mm"]);
    let i_in = idx(&["precip_in", "inches", "value"]);
    let i_pop = idx(&["pop", "probability"]);
    if i_mm.is_none() && i_in.is_none() {
        anyhow::bail!("no precipitation column in {}", path.display());
    }

    let mut out = Forecast::default();
    let mut skipped = 0usize;
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("reading row {}", row + 1))?;
        let num = |i: Option<usize>| i.and_then(|ix| rec.get(ix)).and_then(|s| s.trim().parse::<f64>().ok());

        let Some(time) = rec.get(i_time).and_then(parse_valid_time) else {
            skipped += 1;
            continue;
        };
        let inches = match (num(i_mm), num(i_in)) {
            (Some(mm), _) => mm_to_inches(mm),
            (None, Some(inches)) => inches,
            (None, None) => {
                skipped += 1;
                continue;
            }
        };
        out.precip.push(ChartPoint::new(time, inches));
        if let Some(pop) = num(i_pop) {
            out.probability.push(ChartPoint::new(time, pop));
        }
    }
    if skipped > 0 {
        warn!(skipped, "skipped unparseable forecast rows");
    }
    info!(rows = out.precip.len(), path = %path.display(), "loaded forecast");
    Ok(out)
}

/// A 3-hourly stand-in forecast for when no CSV is available.
pub fn synthetic_forecast(start: NaiveDateTime, n: usize) -> Forecast {
    let mut out = Forecast::default();
    for i in 0..n {
        let t = start + Duration::hours(3 * i as i64);
        let phase = i as f64 / 3.5;
        let mm = (6.0 * phase.sin() + 1.2 * (i as f64 / 1.7).cos()).max(0.0);
        out.precip.push(ChartPoint::new(t, mm_to_inches(mm)));
        out.probability.push(ChartPoint::new(t, (50.0 + 45.0 * phase.sin()).clamp(0.0, 100.0)));
    }
    out
}
