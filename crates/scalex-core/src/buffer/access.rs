//! Pixel access functions
//!
//! Direct, bounds-checked reads and writes of single pixels. Algorithms that
//! may look past the buffer edge go through
//! [`EdgeSampler`](crate::EdgeSampler) instead.

use super::PixelBuffer;
use crate::error::{Error, Result};
use crate::pixel::Pixel;

impl<P: Pixel> PixelBuffer<P> {
    #[inline]
    fn check_bounds(&self, x: u32, y: u32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Get the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinates are outside the
    /// buffer.
    pub fn get(&self, x: u32, y: u32) -> Result<P> {
        self.check_bounds(x, y)?;
        Ok(self.row(y)[x as usize])
    }

    /// Get the pixel at (x, y) of a position the caller already checked.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> P {
        self.row(y)[x as usize]
    }

    /// Set the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinates are outside the
    /// buffer.
    pub fn set(&mut self, x: u32, y: u32, value: P) -> Result<()> {
        self.check_bounds(x, y)?;
        self.row_mut(y)[x as usize] = value;
        Ok(())
    }

    /// Set the pixel at (x, y) of a position the caller already checked.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, value: P) {
        self.row_mut(y)[x as usize] = value;
    }
}
