//! ScaleX - Pixel-art upscaling and box blur over raw bitmap memory
//!
//! # Overview
//!
//! ScaleX works on owned, strided pixel buffers in fixed byte layouts
//! (`Bgr24`, `Bgr32`, `Bgra32`, `Rgba32`) and provides:
//!
//! - Scale2x and Scale3x pixel-art upscaling ([`transform`])
//! - Edge-clamped box blur ([`filter`])
//! - Parallel pixel counting and buffer comparison
//!
//! # Example
//!
//! ```
//! use scalex::transform::{PixelArtScale, scale_pixel_art};
//! use scalex::{Bgr32, PixelBuffer, buffers_equal, count_matching};
//!
//! let mut src = PixelBuffer::new_filled(4, 4, Bgr32::WHITE).unwrap();
//! src.set(1, 1, Bgr32::BLACK).unwrap();
//!
//! let big = scale_pixel_art(&src, PixelArtScale::X2).unwrap();
//! assert_eq!(count_matching(&big, Bgr32::BLACK, false), 4);
//!
//! let blurred = scalex::filter::box_blur(&src, 0).unwrap();
//! assert!(buffers_equal(&src, &blurred));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use scalex_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use scalex_filter as filter;
pub use scalex_transform as transform;
