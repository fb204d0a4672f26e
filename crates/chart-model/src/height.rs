// File: crates/chart-model/src/height.rs
// Summary: Height resolution: coercion, floor clamp, type-dependent defaults.

use serde_json::Value;

use crate::types::{ChartType, DEFAULT_HEIGHT, GAUGE_DEFAULT_HEIGHT, MIN_HEIGHT};

/// Resolve a raw host-supplied height to an integer pixel value.
///
/// Non-numeric input (including null) yields the type default: 200 for gauge
/// charts, 400 for everything else. Numeric input is truncated toward zero
/// and clamped to the 200px floor. Total over any input; never fails.
pub fn resolve_height(raw: &Value, chart_type: ChartType) -> i32 {
    match raw.as_f64() {
        Some(h) => {
            let h = h.trunc() as i32;
            if h <= MIN_HEIGHT { MIN_HEIGHT } else { h }
        }
        None => default_height(chart_type),
    }
}

/// Default pixel height for a chart type when the host supplied none.
pub fn default_height(chart_type: ChartType) -> i32 {
    match chart_type {
        ChartType::Gauge => GAUGE_DEFAULT_HEIGHT,
        _ => DEFAULT_HEIGHT,
    }
}
