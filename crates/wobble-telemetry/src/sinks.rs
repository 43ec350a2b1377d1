//! Pluggable event sinks.

use std::sync::{Arc, Mutex};

use crate::events::SurfaceEvent;

/// Trait for event consumers.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &SurfaceEvent);

    /// Called when the surface is torn down.
    fn finalize(&mut self) {}

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// Collects events in memory.
///
/// The log is shared, so a handle taken with [`VecSink::log`] can still be
/// read after the sink has been boxed into a bus.
pub struct VecSink {
    events: Arc<Mutex<Vec<SurfaceEvent>>>,
}

impl VecSink {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shared handle to the collected events.
    pub fn log(&self) -> Arc<Mutex<Vec<SurfaceEvent>>> {
        Arc::clone(&self.events)
    }
}

impl Default for VecSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &SurfaceEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// Forwards events to `tracing`.
pub struct TracingSink {
    level: tracing::Level,
}

impl TracingSink {
    pub fn new(level: tracing::Level) -> Self {
        Self { level }
    }

    /// Level every event is logged at.
    pub fn level(&self) -> tracing::Level {
        self.level
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &SurfaceEvent) {
        // `tracing` macros need a constant level.
        if self.level == tracing::Level::TRACE {
            tracing::trace!(frame = event.frame, event = ?event.kind, "surface_event");
        } else if self.level == tracing::Level::DEBUG {
            tracing::debug!(frame = event.frame, event = ?event.kind, "surface_event");
        } else if self.level == tracing::Level::INFO {
            tracing::info!(frame = event.frame, event = ?event.kind, "surface_event");
        } else if self.level == tracing::Level::WARN {
            tracing::warn!(frame = event.frame, event = ?event.kind, "surface_event");
        } else {
            tracing::error!(frame = event.frame, event = ?event.kind, "surface_event");
        }
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}
