//! Animation constants and defaults.

use crate::Scalar;

/// Number of corners (and edges) of the wobbling quadrilateral.
pub const EDGE_COUNT: usize = 4;

/// Number of simulated points: one midpoint and one curvature center per edge.
pub const DYNAMIC_POINT_COUNT: usize = 2 * EDGE_COUNT;

/// Default spring oscillation frequency (Hz).
pub const DEFAULT_FREQUENCY_HZ: Scalar = 3.0;

/// Default spring damping ratio. 1.0 is critical damping.
pub const DEFAULT_DAMPING_RATIO: Scalar = 0.3;

/// Default display frame interval (seconds). 1/60th of a second.
pub const DEFAULT_DT: Scalar = 1.0 / 60.0;

/// Motion magnitude (points per second) below which the mesh is at rest.
pub const SETTLE_EPSILON: Scalar = 1.0e-2;

/// Lower bound applied to spring frequencies so `ω` never reaches zero.
pub const MIN_FREQUENCY_HZ: Scalar = 1.0e-3;

/// Upper bound on spring frequencies. Far above anything a display can
/// show, and low enough that `ω²` stays well inside `f32` range.
pub const MAX_FREQUENCY_HZ: Scalar = 1.0e3;

/// Tolerance used to treat a damping ratio as critical.
pub const CRITICAL_DAMPING_TOLERANCE: Scalar = 1.0e-4;
