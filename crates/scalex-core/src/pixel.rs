//! Pixel layouts
//!
//! A pixel layout is a fixed-size `#[repr(C)]` struct of 8-bit channels
//! whose byte order matches the bitmap memory it is read from. The
//! [`Pixel`] trait ties each layout to a [`PixelFormat`] descriptor, which
//! tells the comparison code which bytes are color, which byte is alpha, and
//! which byte is padding.
//!
//! # Byte order
//!
//! | Layout | byte 0 | byte 1 | byte 2 | byte 3 |
//! |---|---|---|---|---|
//! | [`Bgr24`] | B | G | R | - |
//! | [`Bgr32`] | B | G | R | unused |
//! | [`Bgra32`] | B | G | R | A |
//! | [`Rgba32`] | R | G | B | A |

use crate::error::{Error, Result};
use bytemuck::{Pod, Zeroable};
use std::fmt;

/// Byte layout of a pixel type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// 24-bit B,G,R
    Bgr24,
    /// 32-bit B,G,R with one padding byte
    Bgr32,
    /// 32-bit B,G,R,A
    Bgra32,
    /// 32-bit R,G,B,A
    Rgba32,
}

impl PixelFormat {
    /// Size of one pixel in bytes.
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Bgr24 => 3,
            PixelFormat::Bgr32 | PixelFormat::Bgra32 | PixelFormat::Rgba32 => 4,
        }
    }

    /// Whether the layout carries an alpha channel.
    pub const fn has_alpha(self) -> bool {
        self.alpha_index().is_some()
    }

    /// Byte index of the alpha channel, if any.
    pub const fn alpha_index(self) -> Option<usize> {
        match self {
            PixelFormat::Bgra32 | PixelFormat::Rgba32 => Some(3),
            PixelFormat::Bgr24 | PixelFormat::Bgr32 => None,
        }
    }

    /// Number of leading color channels.
    ///
    /// Color channels always come first; alpha or padding follow them.
    pub const fn color_channels(self) -> usize {
        3
    }

    /// Compare two raw pixels of this format channel by channel.
    ///
    /// Color channels must match exactly. The alpha channel is compared only
    /// when `include_alpha` is set and the format has one; padding is never
    /// compared.
    ///
    /// # Panics
    ///
    /// Panics if either slice is shorter than [`Self::bytes_per_pixel`].
    #[inline]
    pub fn same_color(self, a: &[u8], b: &[u8], include_alpha: bool) -> bool {
        let n = self.color_channels();
        if a[..n] != b[..n] {
            return false;
        }
        match self.alpha_index() {
            Some(i) if include_alpha => a[i] == b[i],
            _ => true,
        }
    }
}

/// A fixed-size pixel layout made of 8-bit channels.
///
/// Implementors must be `#[repr(C)]` structs of `u8` fields so that the
/// size equals `FORMAT.bytes_per_pixel()` and the alignment is 1. Buffers
/// check both when they are created.
pub trait Pixel: Pod + Eq + fmt::Debug + Send + Sync {
    /// Descriptor of the byte layout.
    const FORMAT: PixelFormat;

    /// Raw channel bytes in memory order.
    #[inline]
    fn channels(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Color equality under the alpha policy of [`PixelFormat::same_color`].
    #[inline]
    fn same_color(&self, other: &Self, include_alpha: bool) -> bool {
        Self::FORMAT.same_color(self.channels(), other.channels(), include_alpha)
    }
}

/// Verify that `P` can be viewed directly over byte memory.
pub(crate) fn check_layout<P: Pixel>() -> Result<()> {
    if std::mem::align_of::<P>() != 1 {
        return Err(Error::UnsupportedLayout("pixel alignment must be 1"));
    }
    if std::mem::size_of::<P>() != P::FORMAT.bytes_per_pixel() {
        return Err(Error::UnsupportedLayout(
            "pixel size does not match its format",
        ));
    }
    Ok(())
}

/// 24-bit pixel, blue first
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct Bgr24 {
    pub b: u8,
    pub g: u8,
    pub r: u8,
}

impl Bgr24 {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a pixel from its red, green and blue components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { b, g, r }
    }
}

impl Pixel for Bgr24 {
    const FORMAT: PixelFormat = PixelFormat::Bgr24;
}

/// 32-bit pixel, blue first, last byte unused
///
/// The padding byte takes part in whole-pixel equality (`==`) but not in
/// color comparison.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct Bgr32 {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub unused: u8,
}

impl Bgr32 {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a pixel from its red, green and blue components.
    ///
    /// The padding byte is zeroed.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { b, g, r, unused: 0 }
    }
}

impl Pixel for Bgr32 {
    const FORMAT: PixelFormat = PixelFormat::Bgr32;
}

/// 32-bit pixel, blue first, alpha last
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct Bgra32 {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl Bgra32 {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Create a pixel from its red, green, blue and alpha components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }
}

impl Pixel for Bgra32 {
    const FORMAT: PixelFormat = PixelFormat::Bgra32;
}

/// 32-bit pixel, red first, alpha last
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct Rgba32 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba32 {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Create a pixel from its red, green, blue and alpha components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Pixel for Rgba32 {
    const FORMAT: PixelFormat = PixelFormat::Rgba32;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_sizes() {
        assert!(check_layout::<Bgr24>().is_ok());
        assert!(check_layout::<Bgr32>().is_ok());
        assert!(check_layout::<Bgra32>().is_ok());
        assert!(check_layout::<Rgba32>().is_ok());
    }

    #[test]
    fn test_channel_order() {
        assert_eq!(Bgr24::new(1, 2, 3).channels(), &[3, 2, 1]);
        assert_eq!(Bgr32::new(1, 2, 3).channels(), &[3, 2, 1, 0]);
        assert_eq!(Bgra32::new(1, 2, 3, 4).channels(), &[3, 2, 1, 4]);
        assert_eq!(Rgba32::new(1, 2, 3, 4).channels(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_same_color_alpha_policy() {
        let opaque = Bgra32::new(10, 20, 30, 255);
        let clear = Bgra32::new(10, 20, 30, 0);
        assert!(opaque.same_color(&clear, false));
        assert!(!opaque.same_color(&clear, true));
        assert!(!opaque.same_color(&Bgra32::new(11, 20, 30, 255), false));
    }

    #[test]
    fn test_same_color_ignores_padding() {
        let a = Bgr32::new(1, 2, 3);
        let b = Bgr32 { unused: 0xff, ..a };
        assert!(a.same_color(&b, true));
        assert_ne!(a, b);
    }
}
