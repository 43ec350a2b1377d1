//! JSON path exporter — writes per-frame outlines for visual inspection.
//!
//! Captures every submitted path, then serializes the whole animation to a
//! JSON file on `finalize()`. Each frame carries both the structured
//! segments and ready-to-use SVG path data.

use serde::Serialize;
use wobble_mesh::{ClosedPath, PathSegment, Vec2};
use wobble_types::{WobbleError, WobbleResult};

use crate::sink::PathSink;

#[derive(Serialize)]
struct FrameData {
    frame: u64,
    start: Vec2,
    segments: Vec<PathSegment>,
    svg: String,
}

#[derive(Serialize)]
struct AnimationData<'a> {
    sink: &'a str,
    frame_count: usize,
    frames: &'a [FrameData],
}

/// Exports outlines to a JSON file.
///
/// Usage:
/// ```text
/// let mut exporter = JsonPathExporter::new("outline.json");
/// // ... surface submits a path every frame ...
/// exporter.finalize()?; // Writes the JSON file
/// ```
pub struct JsonPathExporter {
    output_path: String,
    frames: Vec<FrameData>,
}

impl JsonPathExporter {
    /// Creates a new exporter that will write to the given path.
    pub fn new(output_path: &str) -> Self {
        Self {
            output_path: output_path.to_string(),
            frames: Vec::new(),
        }
    }

    /// Serializes the captured frames without writing them.
    pub fn to_json(&self) -> WobbleResult<String> {
        let data = AnimationData {
            sink: self.name(),
            frame_count: self.frames.len(),
            frames: &self.frames,
        };
        serde_json::to_string(&data)
            .map_err(|e| WobbleError::Serialization(format!("JSON serialization failed: {e}")))
    }
}

impl PathSink for JsonPathExporter {
    fn submit(&mut self, frame: u64, path: &ClosedPath) -> WobbleResult<()> {
        self.frames.push(FrameData {
            frame,
            start: path.start,
            segments: path.segments.clone(),
            svg: path.to_svg_data(),
        });
        Ok(())
    }

    fn finalize(&mut self) -> WobbleResult<()> {
        let json = self.to_json()?;
        std::fs::write(&self.output_path, json)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "json_exporter"
    }

    fn frame_count(&self) -> u32 {
        self.frames.len() as u32
    }
}
