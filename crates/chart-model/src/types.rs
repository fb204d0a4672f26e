// File: crates/chart-model/src/types.rs
// Summary: Shared types and constants (chart type enumeration, pixel heights).

use serde_json::Value;
use strum::{AsRefStr, EnumIter, EnumString};

/// Smallest height the widget will accept, in pixels.
pub const MIN_HEIGHT: i32 = 200;
/// Default height in pixels for every chart type except gauge.
pub const DEFAULT_HEIGHT: i32 = 400;
/// Default height in pixels for gauge charts.
pub const GAUGE_DEFAULT_HEIGHT: i32 = 200;

/// Closed set of chart types the widget knows how to render.
/// Contract: anything outside this set resolves to `Pie`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, AsRefStr, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ChartType {
    #[default]
    Pie,
    Donut,
    Line,
    Area,
    Gauge,
}

impl ChartType {
    /// Resolve a raw host-supplied value to a chart type.
    /// A string matching a known lowercase name resolves to that variant;
    /// everything else falls back to the default.
    pub fn resolve(raw: &Value) -> Self {
        match raw.as_str().and_then(|s| s.parse().ok()) {
            Some(t) => t,
            None => {
                if !raw.is_null() {
                    log::warn!("unknown chart type {raw}, falling back to pie");
                }
                Self::default()
            }
        }
    }
}
