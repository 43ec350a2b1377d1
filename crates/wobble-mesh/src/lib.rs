//! # wobble-mesh
//!
//! Geometry of the wobbling quadrilateral: the surface rectangle, the
//! edge mask, the twelve anchor positions derived from the rectangle, and
//! the closed outline built from live mesh positions.
//!
//! ## Key Types
//!
//! - [`Rect`] — The surface rectangle reported by the geometry source.
//! - [`EdgeMask`] — 4-bit flag set selecting curved edges.
//! - [`ControlPointSet`] — Corners plus midpoint and curvature-center anchors.
//! - [`CurvePathBuilder`] — Pure conversion from mesh positions to a [`ClosedPath`].

pub mod control_points;
pub mod edge_mask;
pub mod path;
pub mod path_builder;
pub mod rect;

// Re-export glam's vector as the canonical point type.
pub use glam::Vec2;

pub use control_points::ControlPointSet;
pub use edge_mask::EdgeMask;
pub use path::{ClosedPath, PathSegment};
pub use path_builder::{CurvePathBuilder, MeshFrame};
pub use rect::Rect;

/// A real-valued 2D coordinate.
pub type Point2D = Vec2;
