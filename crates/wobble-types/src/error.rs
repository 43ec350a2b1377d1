//! Error types for the wobble engine.
//!
//! All crates return `WobbleResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for the wobble engine.
#[derive(Debug, Error)]
pub enum WobbleError {
    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Surface geometry cannot be simulated (non-finite coordinates).
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, WobbleError>`.
pub type WobbleResult<T> = Result<T, WobbleError>;
