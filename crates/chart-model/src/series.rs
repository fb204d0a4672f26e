// File: crates/chart-model/src/series.rs
// Summary: Series model and normalization of heterogeneous host input shapes.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::bounds::{bounds_of, scan_numeric_leaves, Bounds};

/// One labeled series: a non-empty JSON object map owned by the model.
/// Construction always clones the map, so the stored representation never
/// aliases caller-owned data.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    fields: Map<String, Value>,
}

/// Why a raw value could not become a `Series`. Internal to normalization;
/// the public API maps these to silent fallbacks.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("series entry is not an object")]
    NotAnObject,
    #[error("series object has no fields")]
    EmptyObject,
}

impl Series {
    /// Wrap a raw value as a series. Only non-empty objects qualify.
    pub fn from_value(raw: &Value) -> Result<Self, ShapeError> {
        match raw.as_object() {
            Some(map) if map.is_empty() => Err(ShapeError::EmptyObject),
            Some(map) => Ok(Self { fields: map.clone() }),
            None => Err(ShapeError::NotAnObject),
        }
    }

    /// The `"label"` field, when present and a string.
    pub fn label(&self) -> Option<&str> {
        self.fields.get("label").and_then(Value::as_str)
    }

    /// The ordered `"data"` field, when present and an array.
    pub fn data(&self) -> Option<&[Value]> {
        self.fields.get("data").and_then(Value::as_array).map(Vec::as_slice)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Fold this series' data points into a bounds accumulator.
    /// Point series carry a `"data"` sequence and only it is scanned; series
    /// without one (the gauge shape) are scanned whole, so whatever numeric
    /// field holds the measurement is picked up without naming it.
    pub(crate) fn scan_bounds(&self, acc: &mut Option<Bounds>) {
        match self.fields.get("data") {
            Some(data) => scan_numeric_leaves(data, acc),
            None => {
                for value in self.fields.values() {
                    scan_numeric_leaves(value, acc);
                }
            }
        }
    }
}

/// Canonical form of the host's series input: an ordered collection plus the
/// global bounds across every data point in it.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct NormalizedSeries {
    pub collection: Vec<Series>,
    pub bounds: Option<Bounds>,
}

impl NormalizedSeries {
    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }
}

/// Shape of the raw input, classified once at the boundary.
enum SeriesInput<'a> {
    Missing,
    Many(&'a [Value]),
    One(&'a Value),
}

fn classify(raw: &Value) -> SeriesInput<'_> {
    match raw {
        Value::Array(items) => SeriesInput::Many(items),
        Value::Object(map) if !map.is_empty() => SeriesInput::One(raw),
        _ => SeriesInput::Missing,
    }
}

/// Normalize raw host input into the canonical collection-plus-bounds form.
///
/// Accepts a list of series objects, a single series object (wrapped as a
/// singleton), or anything else (treated as empty). Never mutates its input
/// and is total: every value, including wrong-shaped ones, produces a
/// defined output.
pub fn normalize_series(raw: &Value) -> NormalizedSeries {
    let collection: Vec<Series> = match classify(raw) {
        SeriesInput::Missing => Vec::new(),
        SeriesInput::Many(items) => items
            .iter()
            .filter_map(|item| match Series::from_value(item) {
                Ok(series) => Some(series),
                Err(err) => {
                    log::warn!("dropping series entry: {err}");
                    None
                }
            })
            .collect(),
        SeriesInput::One(value) => match Series::from_value(value) {
            Ok(series) => vec![series],
            Err(_) => Vec::new(),
        },
    };
    let bounds = bounds_of(&collection);
    NormalizedSeries { collection, bounds }
}
