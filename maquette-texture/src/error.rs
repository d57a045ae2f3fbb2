//! Error types for texture synthesis.

use thiserror::Error;

/// Result type for texture operations.
pub type TextureResult<T> = Result<T, TextureError>;

/// Errors that can occur during texture synthesis.
#[derive(Debug, Error)]
pub enum TextureError {
    /// Raster size must be at least one pixel.
    #[error("invalid raster size: {0}")]
    InvalidSize(u32),

    /// The pattern name is not one of the known patterns.
    #[error("unknown pattern name: {0}")]
    UnknownPattern(String),
}
