// File: crates/chart-model/src/lib.rs
// Summary: Library entry point; exports the chart input model API.

pub mod bounds;
pub mod events;
pub mod height;
pub mod model;
pub mod series;
pub mod types;

pub use bounds::{bounds_of, Bounds};
pub use events::{EventRelay, SeriesEventListener};
pub use height::{default_height, resolve_height};
pub use model::ChartModel;
pub use series::{normalize_series, NormalizedSeries, Series, ShapeError};
pub use types::{ChartType, DEFAULT_HEIGHT, GAUGE_DEFAULT_HEIGHT, MIN_HEIGHT};
