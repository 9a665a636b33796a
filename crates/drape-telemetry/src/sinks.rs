//! Pluggable event sinks.
//!
//! Sinks consume events from the bus and process them
//! (log via `tracing`, capture in memory for tests, etc.).

use std::sync::{Arc, Mutex};

use crate::events::FitEvent;

/// Trait for event consumers.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &FitEvent);

    /// Called when the session ends. Flush buffers, close files, etc.
    fn finalize(&mut self) {}

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// A sink that collects events in memory for testing and inspection.
///
/// The buffer is shared, so a handle obtained with [`VecSink::events`]
/// stays readable after the sink is boxed into a bus.
#[derive(Clone, Default)]
pub struct VecSink {
    events: Arc<Mutex<Vec<FitEvent>>>,
}

impl VecSink {
    /// Creates an empty vec sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the collected events.
    pub fn events(&self) -> Arc<Mutex<Vec<FitEvent>>> {
        Arc::clone(&self.events)
    }

    /// Number of collected events.
    pub fn len(&self) -> usize {
        self.events.lock().map(|e| e.len()).unwrap_or(0)
    }

    /// Returns true if nothing has been collected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &FitEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// A sink that logs events using the `tracing` crate.
pub struct TracingSink {
    level: tracing::Level,
}

impl TracingSink {
    /// Creates a new tracing sink at the given log level.
    pub fn new(level: tracing::Level) -> Self {
        Self { level }
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new(tracing::Level::INFO)
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &FitEvent) {
        // `tracing` levels must be static at the call site.
        match self.level {
            tracing::Level::ERROR | tracing::Level::WARN | tracing::Level::INFO => {
                tracing::info!(frame = event.frame, event = ?event.kind, "fit_event")
            }
            tracing::Level::DEBUG => {
                tracing::debug!(frame = event.frame, event = ?event.kind, "fit_event")
            }
            tracing::Level::TRACE => {
                tracing::trace!(frame = event.frame, event = ?event.kind, "fit_event")
            }
        }
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}
