//! Mesh snapshot serialization for inspection.
//!
//! Snapshots are read-only dumps: there is no way to rebuild a simulator
//! from one.

use serde::{Deserialize, Serialize};
use wobble_mesh::Rect;
use wobble_solver::{SimulatorState, WobbleSimulator};
use wobble_types::{WobbleError, WobbleResult};

/// The mesh at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshSnapshot {
    /// Display frame index when this snapshot was taken.
    pub frame: u64,
    /// Simulated time in seconds.
    pub sim_time: f64,
    pub state: SimulatorState,
    pub rect: Rect,
    /// Corner positions (flat: [x0, y0, x1, y1, ...]).
    pub corners: Vec<f32>,
    /// Dynamic point positions in arena order (flat).
    pub positions: Vec<f32>,
    /// Dynamic point velocities in arena order (flat).
    pub velocities: Vec<f32>,
    /// Largest per-point motion magnitude.
    pub motion: f32,
}

impl MeshSnapshot {
    /// Captures the simulator's current mesh.
    pub fn capture(frame: u64, sim_time: f64, simulator: &WobbleSimulator) -> Self {
        let points = simulator.mesh().points();
        let mut positions = Vec::with_capacity(points.len() * 2);
        let mut velocities = Vec::with_capacity(points.len() * 2);
        for point in points {
            positions.extend_from_slice(&point.position.to_array());
            velocities.extend_from_slice(&point.velocity.to_array());
        }

        Self {
            frame,
            sim_time,
            state: simulator.state(),
            rect: simulator.control_points().rect(),
            corners: simulator
                .control_points()
                .corners()
                .iter()
                .flat_map(|c| c.to_array())
                .collect(),
            positions,
            velocities,
            motion: simulator.motion(),
        }
    }

    /// Number of dynamic points in the snapshot.
    pub fn point_count(&self) -> usize {
        self.positions.len() / 2
    }

    /// Largest point speed.
    pub fn max_speed(&self) -> f32 {
        self.velocities
            .chunks_exact(2)
            .map(|v| (v[0] * v[0] + v[1] * v[1]).sqrt())
            .fold(0.0, f32::max)
    }

    /// Serializes to compact binary format.
    pub fn to_bytes(&self) -> WobbleResult<Vec<u8>> {
        bincode::serialize(self)
            .map_err(|e| WobbleError::Serialization(format!("Snapshot serialization failed: {e}")))
    }

    /// Deserializes from binary format.
    pub fn from_bytes(data: &[u8]) -> WobbleResult<Self> {
        bincode::deserialize(data)
            .map_err(|e| WobbleError::Serialization(format!("Snapshot deserialization failed: {e}")))
    }
}
