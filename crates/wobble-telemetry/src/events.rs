//! Surface event types.
//!
//! Lightweight value types emitted by the surface driver at each stage of
//! a frame, tagged with the frame index.

use serde::{Deserialize, Serialize};

/// An event emitted by a wobbling surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceEvent {
    /// Display frame index (0-indexed).
    pub frame: u64,
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// The geometry source reported a new rectangle.
    GeometryChanged {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },

    /// The spring network was stepped.
    Tick {
        /// Frame interval (seconds).
        dt: f32,
        /// Largest per-point motion magnitude after the step.
        motion: f32,
    },

    /// Motion fell below the settle epsilon; the clock was paused.
    Settled {
        /// Ticks stepped since the simulator was created.
        ticks: u64,
    },

    /// The frame clock started delivering frames.
    ClockResumed,

    /// The frame clock stopped delivering frames.
    ClockPaused,

    /// The attachment set was rebuilt with new parameters.
    Reset {
        frequency_hz: f32,
        damping_ratio: f32,
        /// Edge mask bits.
        edges: u8,
    },

    /// An outline was handed to the path sinks.
    PathPublished {
        segments: u32,
        curves: u32,
    },

    /// Custom event for extensibility.
    Custom {
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl SurfaceEvent {
    /// Creates a new event for the given frame.
    pub fn new(frame: u64, kind: EventKind) -> Self {
        Self { frame, kind }
    }
}
