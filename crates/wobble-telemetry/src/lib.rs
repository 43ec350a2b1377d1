//! # wobble-telemetry
//!
//! Event bus for wobble telemetry. Emits structured events (geometry
//! changes, ticks, settling, clock transitions) that can be consumed by
//! pluggable sinks (in-memory logs, `tracing`, etc.).

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SurfaceEvent};
pub use sinks::{EventSink, TracingSink, VecSink};
