//! # wobble-bench
//!
//! Benchmark suite for the wobble engine.
//!
//! Provides procedural geometry scripts, a runner that drives a headless
//! surface through them, and CSV export for regression tracking.

pub mod metrics;
pub mod runner;
pub mod scenarios;

pub use metrics::BenchmarkMetrics;
pub use runner::BenchmarkRunner;
pub use scenarios::{Scenario, ScenarioKind};
