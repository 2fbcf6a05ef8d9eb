//! ScaleX Core - Pixel buffers and buffer reductions
//!
//! This crate provides the data structures every ScaleX algorithm works on:
//!
//! - [`Pixel`] / [`PixelFormat`] - Fixed-size byte layouts ([`Bgr24`],
//!   [`Bgr32`], [`Bgra32`], [`Rgba32`])
//! - [`PixelBuffer`] - Owned, strided bitmap memory with typed row views
//! - [`EdgeSampler`] / [`NeighborWindow`] - Edge-replicating neighbor lookup
//! - [`count_matching`] / [`compare_buffers`] / [`buffers_equal`] - Parallel
//!   row-wise reductions
//!
//! # Features
//!
//! - `parallel` (default): run row reductions and
//!   [`PixelBuffer::for_each_row_band`] on the rayon thread pool

pub mod buffer;
pub mod error;
pub mod pixel;
pub mod sampler;

pub use buffer::{
    BufferComparison, PixelBuffer, RowBand, buffers_equal, compare_buffers, count_matching,
};
pub use error::{Error, Result};
pub use pixel::{Bgr24, Bgr32, Bgra32, Pixel, PixelFormat, Rgba32};
pub use sampler::{EdgeSampler, NeighborWindow, sample_clamped};
