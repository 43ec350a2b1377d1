//! Dynamic point arena — live positions and velocities of the simulated
//! points.
//!
//! Eight slots with stable indices: midpoints in `0..4`, curvature centers
//! in `4..8` (see [`PointId`]). Corners are not stored here; they are rigid
//! and owned by the control point set.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use wobble_mesh::ControlPointSet;
use wobble_types::constants::{DYNAMIC_POINT_COUNT, EDGE_COUNT};
use wobble_types::{EdgeIndex, PointId, Scalar};

/// A simulated point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DynamicPoint {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl DynamicPoint {
    /// A point resting at `position`.
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
        }
    }
}

/// Arena holding every dynamic point.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MeshState {
    points: [DynamicPoint; DYNAMIC_POINT_COUNT],
}

impl MeshState {
    /// Every point at its rest anchor with zero velocity.
    pub fn at_rest(control_points: &ControlPointSet) -> Self {
        let mut points = [DynamicPoint::default(); DYNAMIC_POINT_COUNT];
        for edge in EdgeIndex::ALL {
            points[PointId::midpoint(edge).index()] =
                DynamicPoint::at(control_points.midpoint_anchor(edge));
            points[PointId::curvature_center(edge).index()] =
                DynamicPoint::at(control_points.curvature_anchor(edge));
        }
        Self { points }
    }

    #[inline]
    pub fn point(&self, id: PointId) -> &DynamicPoint {
        &self.points[id.index()]
    }

    #[inline]
    pub fn point_mut(&mut self, id: PointId) -> &mut DynamicPoint {
        &mut self.points[id.index()]
    }

    /// All points in slot order.
    #[inline]
    pub fn points(&self) -> &[DynamicPoint; DYNAMIC_POINT_COUNT] {
        &self.points
    }

    /// Ids of every slot.
    pub fn ids() -> impl Iterator<Item = PointId> {
        (0..DYNAMIC_POINT_COUNT as u32).map(PointId)
    }

    /// Live midpoint positions, indexed by edge.
    pub fn midpoints(&self) -> [Vec2; EDGE_COUNT] {
        EdgeIndex::ALL.map(|edge| self.point(PointId::midpoint(edge)).position)
    }

    /// Live curvature-center positions, indexed by edge.
    pub fn curvature_centers(&self) -> [Vec2; EDGE_COUNT] {
        EdgeIndex::ALL.map(|edge| self.point(PointId::curvature_center(edge)).position)
    }

    /// Largest point speed.
    pub fn max_speed(&self) -> Scalar {
        self.points
            .iter()
            .map(|p| p.velocity.length())
            .fold(0.0, Scalar::max)
    }

    /// Total kinetic energy `0.5 · Σ |v|²` (unit mass).
    pub fn kinetic_energy(&self) -> f64 {
        self.points
            .iter()
            .map(|p| 0.5 * p.velocity.length_squared() as f64)
            .sum()
    }
}
