// File: crates/demo/src/main.rs
// Summary: Demo binary playing the input-binding host: loads a JSON config,
// pushes its fields through the chart model, and prints the resolved snapshot.

use anyhow::{Context, Result};
use chart_model::{ChartModel, SeriesEventListener};
use serde_json::Value;
use std::path::Path;

/// Listener that just echoes interaction payloads to stdout.
struct EchoListener;

impl SeriesEventListener for EchoListener {
    fn on_series_click(&mut self, payload: &Value) {
        println!("click: {payload}");
    }
    fn on_series_hover(&mut self, payload: &Value) {
        println!("hover: {payload}");
    }
}

fn main() -> Result<()> {
    env_logger::init();

    // Accept a JSON config path from CLI or fall back to a built-in sample
    let input = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => {
            log::info!("no input file given, using the built-in sample");
            sample_config()
        }
    };

    let mut model = ChartModel::new();
    model.set_listener(Box::new(EchoListener));

    // Order matters for defaults: resolve the type before an unset height
    if let Some(t) = input.get("type") {
        model.set_type(t);
    }
    model.set_height(input.get("height").cloned().unwrap_or(Value::Null));
    if let Some(series) = input.get("series") {
        model.set_series(series);
    }
    if let Some(title) = input.get("title").and_then(Value::as_str) {
        model.set_title(title);
    }
    if let Some(categories) = input.get("categories").and_then(Value::as_array) {
        model.set_categories(
            categories
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
        );
    }
    if let Some(axis) = input.get("axisOptions") {
        model.set_axis_options(axis.clone());
    }

    println!("type:     {:?}", model.chart_type());
    println!("height:   {}px", model.height());
    println!("series:   {}", model.series().len());
    for s in model.series() {
        let points = s.data().map(|d| d.len()).unwrap_or(0);
        println!("  - {} ({} points)", s.label().unwrap_or("<unlabeled>"), points);
    }
    match model.bounds() {
        Some(b) => println!("bounds:   [{:.4}, {:.4}]", b.min, b.max),
        None => println!("bounds:   <no numeric data>"),
    }
    if model.needs_rebuild() {
        println!("rebuild:  due (renderer would recompute here)");
        model.mark_rebuilt();
    }

    // Simulate the rendering collaborator reporting an interaction
    let payload = serde_json::json!({
        "series": model.series().first().and_then(|s| s.label()),
        "index": 0,
    });
    model.emit_click(&payload);

    Ok(())
}

fn load_config(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn sample_config() -> Value {
    serde_json::json!({
        "type": "line",
        "title": "Monthly revenue",
        "categories": ["Jan", "Feb", "Mar", "Apr"],
        "series": [
            {"label": "2024", "data": [10.5, 12.0, 9.75, 14.25]},
            {"label": "2025", "data": [11.0, 13.5, 12.25, 16.0]},
        ],
    })
}
