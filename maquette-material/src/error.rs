//! Error types for material operations.

use thiserror::Error;

/// Result type for material operations.
pub type MaterialResult<T> = Result<T, MaterialError>;

/// Errors that can occur during material operations.
#[derive(Debug, Error)]
pub enum MaterialError {
    /// No preset is registered under the requested name.
    #[error("unknown material preset: {0}")]
    UnknownPreset(String),
}
