//! Scale factor selection
//!
//! | Mode | Engine | Output size |
//! |---|---|---|
//! | [`PixelArtScale::X2`] | [`scale2x`] | `2W x 2H` |
//! | [`PixelArtScale::X3`] | [`scale3x`] | `3W x 3H` |

use crate::scale2x::scale2x;
use crate::scale3x::scale3x;
use crate::{TransformError, TransformResult};
use scalex_core::{Pixel, PixelBuffer};

/// Pixel-art scale factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelArtScale {
    /// Scale2x (EPX)
    X2,
    /// Scale3x (AdvMAME3x)
    X3,
}

impl PixelArtScale {
    /// The integer factor applied to both dimensions.
    pub fn factor(self) -> u32 {
        match self {
            PixelArtScale::X2 => 2,
            PixelArtScale::X3 => 3,
        }
    }
}

/// Upscale `src` with the engine selected by `mode`.
///
/// # Examples
///
/// ```
/// use scalex_core::{Bgr32, PixelBuffer};
/// use scalex_transform::{PixelArtScale, scale_pixel_art};
///
/// let src = PixelBuffer::new_filled(5, 4, Bgr32::WHITE).unwrap();
/// let out = scale_pixel_art(&src, PixelArtScale::X3).unwrap();
/// assert_eq!((out.width(), out.height()), (15, 12));
/// ```
pub fn scale_pixel_art<P: Pixel>(
    src: &PixelBuffer<P>,
    mode: PixelArtScale,
) -> TransformResult<PixelBuffer<P>> {
    match mode {
        PixelArtScale::X2 => scale2x(src),
        PixelArtScale::X3 => scale3x(src),
    }
}

/// Allocate the zeroed destination for scaling `src` by `factor`.
pub(crate) fn scaled_target<P: Pixel>(
    src: &PixelBuffer<P>,
    factor: u32,
) -> TransformResult<PixelBuffer<P>> {
    let overflow = || TransformError::DimensionOverflow {
        width: src.width(),
        height: src.height(),
        factor,
    };
    let width = src.width().checked_mul(factor).ok_or_else(overflow)?;
    let height = src.height().checked_mul(factor).ok_or_else(overflow)?;
    Ok(PixelBuffer::new(width, height)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scalex_core::Bgra32;

    #[test]
    fn test_factor() {
        assert_eq!(PixelArtScale::X2.factor(), 2);
        assert_eq!(PixelArtScale::X3.factor(), 3);
    }

    #[test]
    fn test_scaled_target_overflow() {
        let src = PixelBuffer::<Bgra32>::new(0, u32::MAX / 2 + 1).unwrap();
        assert!(matches!(
            scaled_target(&src, 2),
            Err(TransformError::DimensionOverflow { factor: 2, .. })
        ));
    }

    #[test]
    fn test_dispatch_sizes() {
        let src = PixelBuffer::new_filled(3, 2, Bgra32::WHITE).unwrap();
        for mode in [PixelArtScale::X2, PixelArtScale::X3] {
            let out = scale_pixel_art(&src, mode).unwrap();
            assert_eq!(out.width(), 3 * mode.factor());
            assert_eq!(out.height(), 2 * mode.factor());
        }
    }
}
