//! Curve path builder — turns live mesh positions into the closed outline
//! used both to fill the surface and to clip its children.
//!
//! Every coordinate is translated by the surface's live origin so the path
//! lives in the surface's own drawing frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use wobble_types::constants::EDGE_COUNT;
use wobble_types::EdgeIndex;

use crate::edge_mask::EdgeMask;
use crate::path::ClosedPath;

/// Instantaneous positions of the whole mesh, in the geometry source's
/// coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MeshFrame {
    /// Live top-left of the surface; the local frame origin.
    pub origin: Vec2,
    pub corners: [Vec2; EDGE_COUNT],
    pub midpoints: [Vec2; EDGE_COUNT],
    pub curvature_centers: [Vec2; EDGE_COUNT],
}

impl MeshFrame {
    /// Converts a point to the surface-local frame.
    #[inline]
    pub fn to_local(&self, point: Vec2) -> Vec2 {
        point - self.origin
    }
}

/// Stateless builder for the wobble outline.
pub struct CurvePathBuilder;

impl CurvePathBuilder {
    /// Builds the closed outline for `frame`.
    ///
    /// Edge `i` runs from corner `i` to corner `i + 1`; it is a quadratic
    /// curve when `edges` selects it and a straight segment otherwise.
    /// The result always has four segments and ends on corner 0.
    pub fn build(frame: &MeshFrame, edges: EdgeMask) -> ClosedPath {
        let mut path = ClosedPath::new(frame.to_local(frame.corners[0]));

        for edge in EdgeIndex::ALL {
            let to = frame.to_local(frame.corners[edge.next().index()]);
            if edges.curves(edge) {
                path.quad_to(Self::control_point(frame, edge), to);
            } else {
                path.line_to(to);
            }
        }

        path
    }

    /// Control point of a curved edge, already in the local frame:
    /// `corner[i] - midpoint[i] - corner[i + 1] - origin`.
    ///
    /// This four-term relation is not a midpoint reflected through the
    /// corner. It is kept as is because it defines the rendered silhouette.
    pub fn control_point(frame: &MeshFrame, edge: EdgeIndex) -> Vec2 {
        let former = frame.corners[edge.index()];
        let latter = frame.corners[edge.next().index()];
        let midpoint = frame.midpoints[edge.index()];

        former - midpoint - latter - frame.origin
    }

    /// Straight-edged outline through the four corners.
    pub fn outline(frame: &MeshFrame) -> ClosedPath {
        Self::build(frame, EdgeMask::NONE)
    }
}
