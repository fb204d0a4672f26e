// File: crates/chart-model/src/model.rs
// Summary: Last-resolved snapshot container; setters recompute synchronously
// and signal the rendering collaborator when a rebuild is due.

use serde_json::Value;

use crate::events::{EventRelay, SeriesEventListener};
use crate::height::resolve_height;
use crate::series::{normalize_series, NormalizedSeries, Series};
use crate::types::ChartType;
use crate::Bounds;

/// The widget's resolved input state. Each setter overwrites the relevant
/// part of the snapshot; nothing is cached beyond the last resolved values.
///
/// Height and type are coupled: the height default depends on the resolved
/// type, so the raw height input is kept and re-resolved whenever the type
/// changes. Callers observe only the resolved value.
pub struct ChartModel {
    chart_type: ChartType,
    height_raw: Value,
    height: i32,
    series: NormalizedSeries,
    categories: Vec<String>,
    title: Option<String>,
    axis_options: Value,
    relay: EventRelay,
    needs_rebuild: bool,
}

impl Default for ChartModel {
    fn default() -> Self {
        let chart_type = ChartType::default();
        Self {
            chart_type,
            height_raw: Value::Null,
            height: resolve_height(&Value::Null, chart_type),
            series: NormalizedSeries::default(),
            categories: Vec::new(),
            title: None,
            axis_options: Value::Null,
            relay: EventRelay::default(),
            needs_rebuild: false,
        }
    }
}

impl ChartModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the raw height, re-resolve against the current type, and flag a
    /// rebuild.
    pub fn set_height(&mut self, raw: Value) {
        self.height = resolve_height(&raw, self.chart_type);
        self.height_raw = raw;
        self.needs_rebuild = true;
        log::debug!("height resolved to {}px", self.height);
    }

    /// Resolve the chart type, then re-resolve height from the stored raw
    /// input. Type resolution must complete first: the height default depends
    /// on it, and resolving in the other order would leave a stale default.
    pub fn set_type(&mut self, raw: &Value) {
        self.chart_type = ChartType::resolve(raw);
        self.height = resolve_height(&self.height_raw, self.chart_type);
        self.needs_rebuild = true;
        log::debug!("type resolved to {:?}, height {}px", self.chart_type, self.height);
    }

    /// Normalize the raw series input into the canonical collection and
    /// derive the global bounds. Does not flag a rebuild; the new collection
    /// is observable immediately.
    pub fn set_series(&mut self, raw: &Value) {
        self.series = normalize_series(raw);
        log::debug!(
            "normalized {} series, bounds {:?}",
            self.series.collection.len(),
            self.series.bounds
        );
    }

    pub fn set_categories(&mut self, categories: Vec<String>) {
        self.categories = categories;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn set_axis_options(&mut self, options: Value) {
        self.axis_options = options;
    }

    pub fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn series(&self) -> &[Series] {
        &self.series.collection
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.series.bounds
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn axis_options(&self) -> &Value {
        &self.axis_options
    }

    /// Whether an upstream change requires the rendering collaborator to
    /// recompute its output. The rebuild itself happens outside this crate.
    pub fn needs_rebuild(&self) -> bool {
        self.needs_rebuild
    }

    /// Acknowledge the rebuild signal; called by the rendering collaborator
    /// after it has recomputed.
    pub fn mark_rebuilt(&mut self) {
        self.needs_rebuild = false;
    }

    pub fn set_listener(&mut self, listener: Box<dyn SeriesEventListener>) {
        self.relay.set_listener(listener);
    }

    pub fn clear_listener(&mut self) {
        self.relay.clear_listener();
    }

    /// Forward a click payload unchanged to the registered listener.
    pub fn emit_click(&mut self, payload: &Value) {
        self.relay.emit_click(payload);
    }

    /// Forward a hover payload unchanged to the registered listener.
    pub fn emit_hover(&mut self, payload: &Value) {
        self.relay.emit_hover(payload);
    }
}
