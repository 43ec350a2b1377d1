//! Benchmark metrics — data collected during a scenario run.

use serde::{Deserialize, Serialize};

/// Metrics collected from a benchmark scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    pub scenario: String,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Display frames that stepped the mesh.
    pub frames_rendered: u32,
    /// Frame on which the clock paused for good, if it did.
    pub settled_frame: Option<u32>,
    /// Average wall-clock time per rendered frame (seconds).
    pub avg_frame_time: f64,
    /// Maximum wall-clock time of a single frame (seconds).
    pub max_frame_time: f64,
    /// Largest motion magnitude seen.
    pub peak_motion: f32,
    /// Motion magnitude when the run ended.
    pub final_motion: f32,
    /// Curved segments in the final outline.
    pub curved_edges: u32,
}

impl BenchmarkMetrics {
    /// CSV header row.
    pub fn to_csv_header() -> String {
        "scenario,frames_rendered,settled_frame,total_wall_time_s,avg_frame_us,max_frame_us,peak_motion,final_motion,curved_edges".to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{:.6},{:.3},{:.3},{:.4},{:.6e},{}",
            self.scenario,
            self.frames_rendered,
            self.settled_frame.map_or_else(String::new, |f| f.to_string()),
            self.total_wall_time,
            self.avg_frame_time * 1e6,
            self.max_frame_time * 1e6,
            self.peak_motion,
            self.final_motion,
            self.curved_edges,
        )
    }

    /// Format multiple metrics as a complete CSV string.
    pub fn to_csv(metrics: &[BenchmarkMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
