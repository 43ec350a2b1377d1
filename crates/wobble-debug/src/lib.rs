//! # wobble-debug
//!
//! State snapshots for debugging wobble behavior. A snapshot captures the
//! rectangle, the rigid corners and every dynamic point at one frame, and
//! serializes to a compact binary dump for offline inspection.

pub mod snapshot;

pub use snapshot::MeshSnapshot;
