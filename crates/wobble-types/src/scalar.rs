//! Scalar type alias for the simulation.
//!
//! `f32` matches `glam::Vec2`, which carries every coordinate in the engine.

/// The floating-point type used throughout the simulation.
pub type Scalar = f32;
