//! Path sinks — consumers of the per-frame outline.
//!
//! A surface feeds two sinks with the identical path every frame: one
//! fills/strokes the surface's own shape, the other clips its children.

use std::sync::{Arc, Mutex};

use wobble_mesh::ClosedPath;
use wobble_types::WobbleResult;

/// Trait for outline consumers.
///
/// # Implementations
/// - [`HeadlessSink`] — Counts and discards paths (benchmarks, CI)
/// - [`RecordingSink`] — Keeps every path in memory
/// - [`JsonPathExporter`](crate::JsonPathExporter) — Writes all paths to a JSON file
pub trait PathSink: Send {
    /// Receives the outline for display frame `frame`.
    fn submit(&mut self, frame: u64, path: &ClosedPath) -> WobbleResult<()>;

    /// Flush buffers, close files, etc.
    fn finalize(&mut self) -> WobbleResult<()> {
        Ok(())
    }

    fn name(&self) -> &str;

    /// Number of paths submitted.
    fn frame_count(&self) -> u32;
}

/// Discards every path.
#[derive(Debug, Default)]
pub struct HeadlessSink {
    frames: u32,
}

impl HeadlessSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PathSink for HeadlessSink {
    fn submit(&mut self, _frame: u64, _path: &ClosedPath) -> WobbleResult<()> {
        self.frames += 1;
        Ok(())
    }

    fn name(&self) -> &str {
        "headless"
    }

    fn frame_count(&self) -> u32 {
        self.frames
    }
}

/// A path together with the frame it was published on.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedPath {
    pub frame: u64,
    pub path: ClosedPath,
}

/// Keeps every submitted path.
///
/// The record is shared: a handle from [`RecordingSink::record`] stays
/// readable after the sink is boxed into a surface.
#[derive(Debug, Default)]
pub struct RecordingSink {
    paths: Arc<Mutex<Vec<RecordedPath>>>,
    frames: u32,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the recorded paths.
    pub fn record(&self) -> Arc<Mutex<Vec<RecordedPath>>> {
        Arc::clone(&self.paths)
    }
}

impl PathSink for RecordingSink {
    fn submit(&mut self, frame: u64, path: &ClosedPath) -> WobbleResult<()> {
        if let Ok(mut paths) = self.paths.lock() {
            paths.push(RecordedPath {
                frame,
                path: path.clone(),
            });
        }
        self.frames += 1;
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }

    fn frame_count(&self) -> u32 {
        self.frames
    }
}
