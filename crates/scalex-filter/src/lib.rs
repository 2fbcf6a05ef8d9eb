//! scalex-filter - Box blur for ScaleX
//!
//! A box blur replaces every pixel by the mean of the square window of
//! side `2 * radius + 1` around it, with the window clamped to the image
//! edges. Each byte of the pixel layout is averaged on its own.
//!
//! - [`box_blur`] - blurred copy, source untouched
//! - [`box_blur_in_place`] - blur an exclusively borrowed buffer
//! - [`box_blur_direct`] - straightforward 2D window, used as the baseline

pub mod box_blur;
mod error;

pub use box_blur::{MAX_RADIUS, box_blur, box_blur_direct, box_blur_in_place};
pub use error::{FilterError, FilterResult};
