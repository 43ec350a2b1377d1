//! # wobble-render
//!
//! Hands wobble outlines to whatever draws them.
//!
//! Provides a `PathSink` trait with headless, recording and JSON-exporting
//! implementations, and [`WobbleSurface`], the driver that connects the
//! geometry source, the simulator, the frame clock and the two path
//! consumers (fill/outline and child clipping).

pub mod json_exporter;
pub mod sink;
pub mod surface;

pub use json_exporter::JsonPathExporter;
pub use sink::{HeadlessSink, PathSink, RecordedPath, RecordingSink};
pub use surface::WobbleSurface;
