//! Error types for the Drape engine.
//!
//! Only construction and validation paths return `DrapeResult<T>`.
//! Fitting paths degrade to documented fallbacks instead of failing.

use thiserror::Error;

/// Unified error type for the Drape engine.
#[derive(Debug, Error)]
pub enum DrapeError {
    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Body measurements are out of the accepted range.
    #[error("Invalid measurements: {0}")]
    InvalidMeasurements(String),

    /// Cloth grid parameters cannot produce a simulatable grid.
    #[error("Invalid cloth grid: {0}")]
    InvalidGrid(String),

    /// Operation is not valid in the current lifecycle state.
    #[error("Invalid state: expected {expected}, found {found}")]
    InvalidState {
        expected: &'static str,
        found: &'static str,
    },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, DrapeError>`.
pub type DrapeResult<T> = Result<T, DrapeError>;
