//! # wobble-types
//!
//! Shared types, identifiers, error types, and animation defaults
//! for the wobble engine.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other wobble crates share.

pub mod constants;
pub mod error;
pub mod ids;
pub mod scalar;

pub use error::{WobbleError, WobbleResult};
pub use ids::{EdgeIndex, PointId};
pub use scalar::Scalar;
