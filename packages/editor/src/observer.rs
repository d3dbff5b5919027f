//! # Observers
//!
//! Structured events emitted by the coordinator. Hosts subscribe to drive
//! a statistics display, a status line or their own logging.
//!
//! Observers are:
//! - **Synchronous**: called inline, in registration order
//! - **Read-only**: they see events, never document state

use scribe_export::ExportFormat;
use scribe_stats::CountDetails;
use serde::Serialize;
use std::sync::{Arc, Mutex};

/// Something that happened inside the coordinator
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum EditorEvent {
    #[serde(rename_all = "camelCase")]
    ContentChanged {
        revision: u64,
        bytes: usize,
        elements: usize,
        text_leaves: usize,
    },

    StatsPublished { revision: u64, stats: CountDetails },

    ExportDelivered { format: ExportFormat, filename: String },

    ExportFailed { format: ExportFormat, reason: String },

    #[serde(rename_all = "camelCase")]
    GenerationCompleted { topic: String, characters: usize },

    GenerationDiscarded { topic: String },

    GenerationFailed { topic: String, reason: String },
}

/// Receives coordinator events
pub trait EditorObserver: Send + Sync {
    fn on_event(&self, event: &EditorEvent);
}

impl<F> EditorObserver for F
where
    F: Fn(&EditorEvent) + Send + Sync,
{
    fn on_event(&self, event: &EditorEvent) {
        self(event)
    }
}

/// Observer that records every event, oldest first
///
/// Clones share one log, so a host can subscribe a clone and read the original.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<EditorEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<EditorEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl EditorObserver for EventLog {
    fn on_event(&self, event: &EditorEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

/// Fans events out to every registered observer
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<Box<dyn EditorObserver>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, observer: Box<dyn EditorObserver>) {
        self.observers.push(observer);
    }

    pub fn emit(&self, event: EditorEvent) {
        for observer in &self.observers {
            observer.on_event(&event);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observers.len())
            .finish()
    }
}
