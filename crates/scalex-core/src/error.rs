//! Error types for scalex-core
//!
//! Provides a unified error type for buffer construction and direct pixel
//! access. Neighbor sampling never fails, so nothing here is raised by the
//! scaling or blur engines once they hold a valid buffer.

use thiserror::Error;

/// ScaleX core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Dimensions whose memory footprint cannot be represented
    #[error("invalid buffer dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Row stride shorter than one row of pixels
    #[error("invalid stride: {stride} bytes, at least {min} required")]
    InvalidStride { stride: usize, min: usize },

    /// Supplied memory block too small for `stride * height`
    #[error("buffer too small: {len} bytes, {required} required")]
    BufferTooSmall { len: usize, required: usize },

    /// Direct pixel access outside the buffer extent
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} buffer")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Pixel type whose memory layout cannot be viewed as byte channels
    #[error("unsupported pixel layout: {0}")]
    UnsupportedLayout(&'static str),
}

/// Result type alias for ScaleX core operations
pub type Result<T> = std::result::Result<T, Error>;
