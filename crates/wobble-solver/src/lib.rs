//! # wobble-solver
//!
//! Spring-damper attachments, the dynamic point arena, and the simulator
//! that steps them once per display frame.
//!
//! ## Key Types
//!
//! - [`WobbleSimulator`] — Owns the attachments and the `Idle`/`Active` state machine
//! - [`SpringAttachment`] — One damped spring pulling a point toward an anchor
//! - [`MeshState`] — Positions and velocities of the eight dynamic points
//! - [`WobbleConfig`] — Frequency, damping, edge mask, settle threshold
//! - [`FrameClock`] — Per-frame callback source the simulator arms and the surface pauses

pub mod clock;
pub mod config;
pub mod simulator;
pub mod spring;
pub mod state;

pub use clock::{FrameClock, ManualFrameClock};
pub use config::WobbleConfig;
pub use simulator::{SimulatorState, TickReport, WobbleSimulator};
pub use spring::{AnchorTarget, SpringAttachment};
pub use state::{DynamicPoint, MeshState};
