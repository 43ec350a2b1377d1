//! Wobble configuration.
//!
//! Parameters that shape the spring network: oscillation frequency,
//! damping ratio, which edges curve, and the rest threshold.

use std::path::Path;

use serde::{Deserialize, Serialize};
use wobble_mesh::EdgeMask;
use wobble_types::constants::{
    DEFAULT_DAMPING_RATIO, DEFAULT_FREQUENCY_HZ, MAX_FREQUENCY_HZ, MIN_FREQUENCY_HZ, SETTLE_EPSILON,
};
use wobble_types::{WobbleError, WobbleResult};

/// Configuration for the wobble simulator.
///
/// Changing any field on a live simulator goes through
/// [`WobbleSimulator::reset`](crate::WobbleSimulator::reset), which
/// rebuilds the attachment set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WobbleConfig {
    /// Natural oscillation frequency of every attachment (Hz). Must lie in
    /// `[MIN_FREQUENCY_HZ, MAX_FREQUENCY_HZ]`.
    pub frequency_hz: f32,

    /// Damping ratio (0.0 = oscillates forever, 1.0 = critical damping).
    /// Values above 1.0 are overdamped. Must be >= 0.
    pub damping_ratio: f32,

    /// Edges rendered as curves.
    pub edges: EdgeMask,

    /// Motion magnitude below which the mesh reports itself settled.
    pub settle_epsilon: f32,
}

impl Default for WobbleConfig {
    fn default() -> Self {
        Self {
            frequency_hz: DEFAULT_FREQUENCY_HZ,
            damping_ratio: DEFAULT_DAMPING_RATIO,
            edges: EdgeMask::default(),
            settle_epsilon: SETTLE_EPSILON,
        }
    }
}

impl WobbleConfig {
    /// Loose, long-lived wobble.
    pub fn jelly() -> Self {
        Self {
            frequency_hz: 2.0,
            damping_ratio: 0.1,
            ..Default::default()
        }
    }

    /// Quick, barely oscillating response.
    pub fn stiff() -> Self {
        Self {
            frequency_hz: 6.0,
            damping_ratio: 0.9,
            ..Default::default()
        }
    }

    /// No damping at all. The mesh never settles once disturbed.
    pub fn undamped() -> Self {
        Self {
            damping_ratio: 0.0,
            ..Default::default()
        }
    }

    /// Returns a copy with a different edge mask.
    pub fn with_edges(mut self, edges: EdgeMask) -> Self {
        self.edges = edges;
        self
    }

    /// Rejects values that would put NaN or infinities into the mesh.
    pub fn validate(&self) -> WobbleResult<()> {
        if !(MIN_FREQUENCY_HZ..=MAX_FREQUENCY_HZ).contains(&self.frequency_hz) {
            return Err(WobbleError::InvalidConfig(format!(
                "Frequency must be between {MIN_FREQUENCY_HZ} and {MAX_FREQUENCY_HZ} Hz, got {}",
                self.frequency_hz
            )));
        }
        if !self.damping_ratio.is_finite() || self.damping_ratio < 0.0 {
            return Err(WobbleError::InvalidConfig(format!(
                "Damping ratio must be non-negative and finite, got {}",
                self.damping_ratio
            )));
        }
        if !self.settle_epsilon.is_finite() || self.settle_epsilon <= 0.0 {
            return Err(WobbleError::InvalidConfig(format!(
                "Settle epsilon must be positive and finite, got {}",
                self.settle_epsilon
            )));
        }
        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> WobbleResult<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| WobbleError::Serialization(format!("TOML parse failed: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> WobbleResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
