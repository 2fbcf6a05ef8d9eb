//! Error types for scalex-transform

use thiserror::Error;

/// Errors that can occur during pixel-art scaling
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] scalex_core::Error),

    /// Scaled dimensions do not fit in `u32`
    #[error("scaling {width}x{height} by {factor} overflows the buffer size")]
    DimensionOverflow { width: u32, height: u32, factor: u32 },
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
