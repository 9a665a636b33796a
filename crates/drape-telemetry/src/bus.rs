//! Event bus: queued event dispatch with pluggable sinks.
//!
//! Producers only hold a shared reference to the bus, so fitting
//! components can emit without taking ownership of it. Events queue in a
//! `std::sync::mpsc` channel and reach the sinks on [`EventBus::flush`].

use std::sync::mpsc;

use crate::events::{EventKind, FitEvent};
use crate::sinks::EventSink;

/// Broadcast event bus for fitting telemetry.
pub struct EventBus {
    sender: mpsc::Sender<FitEvent>,
    receiver: mpsc::Receiver<FitEvent>,
    sinks: Vec<Box<dyn EventSink>>,
    /// Frame stamped onto events emitted through [`EventBus::record`].
    frame: u32,
    /// Disabled bus drops events silently.
    enabled: bool,
}

impl EventBus {
    /// Creates a new event bus with no sinks.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            sinks: Vec::new(),
            frame: 0,
            enabled: true,
        }
    }

    /// Registers a sink to receive events.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Registers a sink (builder style).
    pub fn with_sink(mut self, sink: Box<dyn EventSink>) -> Self {
        self.add_sink(sink);
        self
    }

    /// Enables or disables the bus.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns true if the bus is active.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current frame index.
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Moves to the next frame.
    pub fn next_frame(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    /// Queue a fully formed event. No-op on a disabled bus.
    pub fn emit(&self, event: FitEvent) {
        if !self.enabled {
            return;
        }
        // The receiver lives as long as the bus, so this cannot fail.
        let _ = self.sender.send(event);
    }

    /// Queue a payload stamped with the current frame.
    pub fn record(&self, kind: EventKind) {
        self.emit(FitEvent::new(self.frame, kind));
    }

    /// Dispatch queued events to every sink. Returns how many were dispatched.
    pub fn flush(&mut self) -> usize {
        let mut dispatched = 0;
        while let Ok(event) = self.receiver.try_recv() {
            for sink in &mut self.sinks {
                sink.handle(&event);
            }
            dispatched += 1;
        }
        dispatched
    }

    /// Flushes pending events and finalizes every sink.
    pub fn finish(&mut self) {
        self.flush();
        for sink in &mut self.sinks {
            sink.finalize();
        }
    }

    /// Returns the number of registered sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
