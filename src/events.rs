//! Settings change notifications
//!
//! Pages that mutate shared configuration announce it here so that open
//! editor views can re-layout. Events are (name, data) pairs on a bounded
//! queue; the host drains the queue from its main loop.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Event names emitted by this crate
pub mod names {
    /// Tab behavior settings were applied with at least one tracked change
    pub const TABS_CHANGED: &str = "settings:tabs_changed";
}

/// A single settings notification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettingsEvent {
    /// Namespaced event name, e.g. "settings:tabs_changed"
    pub name: String,
    /// Arbitrary JSON payload
    pub data: Value,
}

impl SettingsEvent {
    pub fn new(name: impl Into<String>, data: Value) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Create an event with no payload
    pub fn simple(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: Value::Null,
        }
    }
}

/// Broadcasts settings events to the host
///
/// Cloneable; all clones share one queue. Oldest events are dropped once
/// the history cap is reached.
#[derive(Clone)]
pub struct SettingsBus {
    events: Arc<Mutex<VecDeque<SettingsEvent>>>,
    max_history: usize,
}

impl SettingsBus {
    pub fn new(max_history: usize) -> Self {
        Self {
            events: Arc::new(Mutex::new(VecDeque::with_capacity(max_history))),
            max_history,
        }
    }

    /// Emit an event
    pub fn emit(&self, event: SettingsEvent) {
        let mut events = self.events.lock().unwrap();
        if events.len() >= self.max_history {
            events.pop_front();
        }
        events.push_back(event);
    }

    /// Convenience: emit with name and data
    pub fn emit_named(&self, name: impl Into<String>, data: Value) {
        self.emit(SettingsEvent::new(name, data));
    }

    /// Convenience: emit event with no payload
    pub fn emit_simple(&self, name: impl Into<String>) {
        self.emit(SettingsEvent::simple(name));
    }

    /// Check whether any queued event has the given name
    pub fn has(&self, name: &str) -> bool {
        let events = self.events.lock().unwrap();
        events.iter().any(|e| e.name == name)
    }

    /// Number of queued events with the given name
    pub fn count(&self, name: &str) -> usize {
        let events = self.events.lock().unwrap();
        events.iter().filter(|e| e.name == name).count()
    }

    /// Drain all events
    pub fn drain(&self) -> Vec<SettingsEvent> {
        let mut events = self.events.lock().unwrap();
        events.drain(..).collect()
    }

    /// Peek at all events without removing them
    pub fn peek(&self) -> Vec<SettingsEvent> {
        let events = self.events.lock().unwrap();
        events.iter().cloned().collect()
    }

    /// Clear all events
    pub fn clear(&self) {
        let mut events = self.events.lock().unwrap();
        events.clear();
    }

    /// Number of pending events
    pub fn len(&self) -> usize {
        let events = self.events.lock().unwrap();
        events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SettingsBus {
    fn default() -> Self {
        Self::new(256)
    }
}
