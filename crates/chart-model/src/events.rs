// File: crates/chart-model/src/events.rs
// Summary: Event relay seam between the rendering collaborator and the consumer.

use serde_json::Value;

/// Listener for user interaction on chart elements. The payload is opaque
/// data describing the clicked/hovered series element; the relay forwards it
/// unchanged and performs no validation.
pub trait SeriesEventListener {
    fn on_series_click(&mut self, payload: &Value);
    fn on_series_hover(&mut self, payload: &Value);
}

/// Holds at most one registered listener and forwards events to it.
/// With no listener registered, emission is a no-op.
#[derive(Default)]
pub struct EventRelay {
    listener: Option<Box<dyn SeriesEventListener>>,
}

impl EventRelay {
    pub fn set_listener(&mut self, listener: Box<dyn SeriesEventListener>) {
        self.listener = Some(listener);
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    pub fn emit_click(&mut self, payload: &Value) {
        if let Some(listener) = self.listener.as_mut() {
            listener.on_series_click(payload);
        }
    }

    pub fn emit_hover(&mut self, payload: &Value) {
        if let Some(listener) = self.listener.as_mut() {
            listener.on_series_hover(payload);
        }
    }
}

impl std::fmt::Debug for EventRelay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventRelay")
            .field("listener", &self.listener.is_some())
            .finish()
    }
}
