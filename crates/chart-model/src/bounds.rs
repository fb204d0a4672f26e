// File: crates/chart-model/src/bounds.rs
// Summary: Global min/max derivation across all series' numeric data points.

use serde_json::Value;

use crate::series::Series;

/// Global minimum and maximum over every data point in a collection.
/// Invariant: `min <= max` whenever a `Bounds` exists.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub fn point(v: f64) -> Self {
        Self { min: v, max: v }
    }

    pub fn expand(&mut self, v: f64) {
        self.min = self.min.min(v);
        self.max = self.max.max(v);
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Fold every numeric leaf of `value` into `acc`, recursing through arrays
/// and objects. Strings, bools, and nulls contribute nothing.
pub fn scan_numeric_leaves(value: &Value, acc: &mut Option<Bounds>) {
    match value {
        Value::Number(n) => {
            if let Some(v) = n.as_f64() {
                match acc {
                    Some(b) => b.expand(v),
                    None => *acc = Some(Bounds::point(v)),
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                scan_numeric_leaves(item, acc);
            }
        }
        Value::Object(map) => {
            for item in map.values() {
                scan_numeric_leaves(item, acc);
            }
        }
        _ => {}
    }
}

/// Bounds over an entire collection; `None` when no numeric data point exists
/// (empty collection, or series without numeric payloads).
pub fn bounds_of(collection: &[Series]) -> Option<Bounds> {
    let mut acc = None;
    for series in collection {
        series.scan_bounds(&mut acc);
    }
    acc
}
