//! Error types for scalex-filter

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] scalex_core::Error),

    /// Blur radius beyond what the accumulators can hold
    #[error("blur radius {radius} exceeds the maximum of {max}")]
    RadiusTooLarge {
        /// Requested radius
        radius: u32,
        /// Largest supported radius
        max: u32,
    },
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
