//! Event bus — broadcast-style event dispatch with pluggable sinks.
//!
//! The bus uses `std::sync::mpsc` so events can be emitted through a shared
//! reference. Sinks receive them on `flush`.

use std::sync::mpsc;

use crate::events::SurfaceEvent;
use crate::sinks::EventSink;

/// Broadcast event bus for surface telemetry.
pub struct EventBus {
    sender: mpsc::Sender<SurfaceEvent>,
    receiver: mpsc::Receiver<SurfaceEvent>,
    sinks: Vec<Box<dyn EventSink>>,
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
            enabled: true,
        }
    }

    /// Registers a sink to receive events.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Enables or disables the bus.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Emit an event. No-op while disabled.
    pub fn emit(&self, event: SurfaceEvent) {
        if !self.enabled {
            return;
        }
        // The receiver lives as long as the bus, so this cannot fail.
        let _ = self.sender.send(event);
    }

    /// Dispatches every pending event to every sink.
    pub fn flush(&mut self) {
        while let Ok(event) = self.receiver.try_recv() {
            for sink in &mut self.sinks {
                sink.handle(&event);
            }
        }
    }

    /// Flushes pending events and lets each sink finish.
    pub fn finalize(&mut self) {
        self.flush();
        for sink in &mut self.sinks {
            sink.finalize();
        }
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
