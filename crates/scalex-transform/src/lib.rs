//! scalex-transform - Pixel-art upscaling for ScaleX
//!
//! This crate provides the EPX family of neighbor-voting upscalers:
//!
//! - Scale2x (EPX): doubles both dimensions using the four orthogonal
//!   neighbors
//! - Scale3x (AdvMAME3x): triples both dimensions using the full 3x3
//!   neighborhood
//!
//! Each engine comes in two forms. The `*_reference` functions apply the
//! rules literally, pixel by pixel, through the edge sampler; the plain
//! functions walk cached row slices and fill whole destination bands, in
//! parallel with the `parallel` feature. Both produce byte-identical output.

mod error;
pub mod pixel_art;
pub mod scale2x;
pub mod scale3x;

pub use error::{TransformError, TransformResult};
pub use pixel_art::{PixelArtScale, scale_pixel_art};
pub use scale2x::{scale2x, scale2x_reference};
pub use scale3x::{scale3x, scale3x_reference};
