//! PixelBuffer - owned bitmap memory with a typed pixel view
//!
//! A `PixelBuffer<P>` owns a contiguous block of `stride * height` bytes and
//! reads it as rows of `P` pixels.
//!
//! # Memory layout
//!
//! - Rows are stored top to bottom, `stride` bytes apart
//! - Each row holds `width` pixels followed by padding up to `stride`
//! - Buffers created here pad rows to a 4-byte boundary; buffers adopted
//!   with [`PixelBuffer::from_raw`] keep the caller's stride
//!
//! # Ownership model
//!
//! A buffer has exactly one owner and is never shared: `clone()` makes an
//! independent deep copy, and the memory is released when the buffer is
//! dropped. Hand the memory to another component with
//! [`PixelBuffer::into_raw`].

mod access;
pub mod compare;

pub use compare::{BufferComparison, buffers_equal, compare_buffers, count_matching};

use crate::error::{Error, Result};
use crate::pixel::{Pixel, PixelFormat, check_layout};
use std::fmt;
use std::marker::PhantomData;

/// Owned pixel memory of a fixed layout `P`
///
/// # Examples
///
/// ```
/// use scalex_core::{Bgr32, PixelBuffer};
///
/// let mut buf = PixelBuffer::<Bgr32>::new(640, 480).unwrap();
/// buf.fill(Bgr32::WHITE);
/// assert_eq!(buf.width(), 640);
/// assert_eq!(buf.stride(), 640 * 4);
/// assert_eq!(buf.get(10, 10).unwrap(), Bgr32::WHITE);
/// ```
#[derive(Clone)]
pub struct PixelBuffer<P: Pixel> {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Bytes per row, at least `width * size_of::<P>()`
    stride: usize,
    /// Row-major pixel memory, at least `stride * height` bytes
    data: Vec<u8>,
    _pixel: PhantomData<P>,
}

impl<P: Pixel> PixelBuffer<P> {
    /// Create a zero-initialized buffer.
    ///
    /// Zero-area buffers (`width == 0` or `height == 0`) are allowed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the memory size cannot be
    /// represented, and [`Error::UnsupportedLayout`] if `P` is not a byte
    /// layout.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        check_layout::<P>()?;
        let stride = Self::compute_stride(width)
            .ok_or(Error::InvalidDimension { width, height })?;
        let size = stride
            .checked_mul(height as usize)
            .filter(|&n| n <= isize::MAX as usize)
            .ok_or(Error::InvalidDimension { width, height })?;

        Ok(PixelBuffer {
            width,
            height,
            stride,
            data: vec![0u8; size],
            _pixel: PhantomData,
        })
    }

    /// Create a buffer with every pixel set to `value`.
    pub fn new_filled(width: u32, height: u32, value: P) -> Result<Self> {
        let mut buf = Self::new(width, height)?;
        buf.fill(value);
        Ok(buf)
    }

    /// Adopt memory supplied by a bitmap collaborator.
    ///
    /// `data` must hold at least `stride * height` bytes; any excess is kept
    /// and returned again by [`into_raw`](Self::into_raw).
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidStride`] if `stride` is shorter than one row
    /// - [`Error::BufferTooSmall`] if `data` is shorter than `stride * height`
    pub fn from_raw(width: u32, height: u32, stride: usize, data: Vec<u8>) -> Result<Self> {
        check_layout::<P>()?;
        let min = (width as usize)
            .checked_mul(P::FORMAT.bytes_per_pixel())
            .ok_or(Error::InvalidDimension { width, height })?;
        if stride < min {
            return Err(Error::InvalidStride { stride, min });
        }
        let required = stride
            .checked_mul(height as usize)
            .ok_or(Error::InvalidDimension { width, height })?;
        if data.len() < required {
            return Err(Error::BufferTooSmall {
                len: data.len(),
                required,
            });
        }

        Ok(PixelBuffer {
            width,
            height,
            stride,
            data,
            _pixel: PhantomData,
        })
    }

    /// Release the memory block to the caller.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Bytes per row for a freshly allocated buffer, padded to 4 bytes.
    fn compute_stride(width: u32) -> Option<usize> {
        let row = (width as usize).checked_mul(P::FORMAT.bytes_per_pixel())?;
        row.div_ceil(4).checked_mul(4)
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes between the starts of consecutive rows.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Get the pixel layout descriptor.
    #[inline]
    pub fn format(&self) -> PixelFormat {
        P::FORMAT
    }

    /// Whether the pixel layout has an alpha channel.
    #[inline]
    pub fn has_alpha(&self) -> bool {
        P::FORMAT.has_alpha()
    }

    /// Whether the buffer holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Number of bytes of pixel data in one row, excluding padding.
    #[inline]
    fn row_bytes(&self) -> usize {
        self.width as usize * P::FORMAT.bytes_per_pixel()
    }

    /// Raw memory, `stride * height` bytes or more.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw memory.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Get the pixels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[P] {
        assert!(y < self.height, "row {y} out of range (height {})", self.height);
        let start = y as usize * self.stride;
        bytemuck::cast_slice(&self.data[start..start + self.row_bytes()])
    }

    /// Get the pixels of row `y` for writing.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [P] {
        assert!(y < self.height, "row {y} out of range (height {})", self.height);
        let start = y as usize * self.stride;
        let end = start + self.row_bytes();
        bytemuck::cast_slice_mut(&mut self.data[start..end])
    }

    /// Iterate over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[P]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    /// Set every pixel to `value`. Row padding is left untouched.
    pub fn fill(&mut self, value: P) {
        for y in 0..self.height {
            self.row_mut(y).fill(value);
        }
    }

    /// Create a zeroed buffer with the same size and stride.
    pub fn create_template(&self) -> Self {
        PixelBuffer {
            width: self.width,
            height: self.height,
            stride: self.stride,
            data: vec![0u8; self.stride * self.height as usize],
            _pixel: PhantomData,
        }
    }

    /// Check whether two buffers have the same width and height.
    pub fn sizes_equal<Q: Pixel>(&self, other: &PixelBuffer<Q>) -> bool {
        self.width == other.width() && self.height == other.height()
    }

    /// Run `f` over disjoint bands of `rows_per_band` whole rows.
    ///
    /// The last band may be shorter. With the `parallel` feature bands are
    /// processed concurrently; the result never depends on band order.
    pub fn for_each_row_band<F>(&mut self, rows_per_band: u32, f: F)
    where
        F: Fn(RowBand<'_, P>) + Send + Sync,
    {
        if self.is_empty() || rows_per_band == 0 {
            return;
        }
        let width = self.width as usize;
        let stride = self.stride;
        let band_len = stride * rows_per_band as usize;
        let used = stride * self.height as usize;
        let bytes = &mut self.data[..used];

        let run = |(i, chunk): (usize, &mut [u8])| {
            f(RowBand {
                first_row: i as u32 * rows_per_band,
                width,
                stride,
                bytes: chunk,
                _pixel: PhantomData,
            })
        };

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            bytes.par_chunks_mut(band_len).enumerate().for_each(run);
        }

        #[cfg(not(feature = "parallel"))]
        bytes.chunks_mut(band_len).enumerate().for_each(run);
    }
}

impl<P: Pixel> fmt::Debug for PixelBuffer<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("stride", &self.stride)
            .field("format", &P::FORMAT)
            .finish()
    }
}

/// A run of consecutive rows borrowed mutably from a [`PixelBuffer`]
///
/// Handed out by [`PixelBuffer::for_each_row_band`].
pub struct RowBand<'a, P: Pixel> {
    first_row: u32,
    width: usize,
    stride: usize,
    bytes: &'a mut [u8],
    _pixel: PhantomData<P>,
}

impl<P: Pixel> RowBand<'_, P> {
    /// Index of the band's first row in the whole buffer.
    #[inline]
    pub fn first_row(&self) -> u32 {
        self.first_row
    }

    /// Number of rows in this band.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.bytes.len().div_ceil(self.stride)
    }

    /// Iterate over the band's rows from top to bottom.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [P]> + '_ {
        let row_bytes = self.width * P::FORMAT.bytes_per_pixel();
        self.bytes
            .chunks_mut(self.stride)
            .map(move |row| bytemuck::cast_slice_mut(&mut row[..row_bytes]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::{Bgr24, Bgr32, Bgra32};

    #[test]
    fn test_new_is_zeroed() {
        let buf = PixelBuffer::<Bgra32>::new(3, 2).unwrap();
        assert_eq!(buf.width(), 3);
        assert_eq!(buf.height(), 2);
        assert!(buf.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_stride_is_padded() {
        let buf = PixelBuffer::<Bgr24>::new(3, 2).unwrap();
        assert_eq!(buf.stride(), 12);
        assert_eq!(buf.as_bytes().len(), 24);
        assert_eq!(buf.row(1).len(), 3);
    }

    #[test]
    fn test_zero_area_allowed() {
        let buf = PixelBuffer::<Bgr32>::new(0, 5).unwrap();
        assert!(buf.is_empty());
        assert_eq!(buf.pixel_count(), 0);
        assert_eq!(buf.rows().count(), 5);
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        let err = PixelBuffer::<Bgr32>::new(u32::MAX, u32::MAX).unwrap_err();
        assert!(matches!(err, Error::InvalidDimension { .. }));
    }

    #[test]
    fn test_from_raw_validation() {
        let err = PixelBuffer::<Bgr32>::from_raw(4, 2, 15, vec![0; 64]).unwrap_err();
        assert_eq!(err, Error::InvalidStride { stride: 15, min: 16 });

        let err = PixelBuffer::<Bgr32>::from_raw(4, 2, 20, vec![0; 39]).unwrap_err();
        assert_eq!(
            err,
            Error::BufferTooSmall {
                len: 39,
                required: 40
            }
        );
    }

    #[test]
    fn test_from_raw_reads_with_stride() {
        let mut data = vec![0u8; 2 * 10];
        data[10..14].copy_from_slice(&[1, 2, 3, 4]);
        let buf = PixelBuffer::<Bgra32>::from_raw(2, 2, 10, data).unwrap();
        assert_eq!(buf.get(0, 1).unwrap(), Bgra32::new(3, 2, 1, 4));
        assert_eq!(buf.into_raw().len(), 20);
    }

    #[test]
    fn test_fill_leaves_padding() {
        let mut buf = PixelBuffer::<Bgr24>::new(1, 2).unwrap();
        buf.fill(Bgr24::WHITE);
        assert_eq!(buf.as_bytes(), &[255, 255, 255, 0, 255, 255, 255, 0]);
    }

    #[test]
    fn test_clone_is_independent() {
        let a = PixelBuffer::new_filled(2, 2, Bgr32::WHITE).unwrap();
        let mut b = a.clone();
        b.fill(Bgr32::BLACK);
        assert_eq!(a.get(1, 1).unwrap(), Bgr32::WHITE);
        assert_eq!(b.get(1, 1).unwrap(), Bgr32::BLACK);
    }

    #[test]
    fn test_row_bands_cover_all_rows() {
        let mut buf = PixelBuffer::<Bgr32>::new(3, 5).unwrap();
        buf.for_each_row_band(2, |mut band| {
            let y = band.first_row();
            for (i, row) in band.rows_mut().enumerate() {
                row.fill(Bgr32::new(y as u8 + i as u8, 0, 0));
            }
        });
        for y in 0..5 {
            assert!(buf.row(y).iter().all(|p| p.r == y as u8));
        }
    }

    #[test]
    #[should_panic]
    fn test_row_out_of_range_panics() {
        let buf = PixelBuffer::<Bgr32>::new(2, 2).unwrap();
        let _ = buf.row(2);
    }
}
