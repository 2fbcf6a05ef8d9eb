//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building test fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Buffer construction failed
    #[error("core error: {0}")]
    Core(#[from] scalex_core::Error),

    /// A palette-based pattern was requested with no colors
    #[error("palette must not be empty")]
    EmptyPalette,
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
