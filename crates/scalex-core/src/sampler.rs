//! Edge-clamped neighbor sampling
//!
//! Every neighbor-based algorithm resolves out-of-range lookups the same
//! way: coordinates are clamped to the nearest edge pixel, so border rows
//! and columns replicate outward.

use crate::buffer::PixelBuffer;
use crate::pixel::Pixel;

/// Reads pixels of a non-empty buffer with edge replication
#[derive(Debug, Clone, Copy)]
pub struct EdgeSampler<'a, P: Pixel> {
    buffer: &'a PixelBuffer<P>,
    max_x: i64,
    max_y: i64,
}

impl<'a, P: Pixel> EdgeSampler<'a, P> {
    /// Wrap a buffer. Returns `None` for a zero-area buffer, which has no
    /// edge pixel to clamp to.
    pub fn new(buffer: &'a PixelBuffer<P>) -> Option<Self> {
        if buffer.is_empty() {
            return None;
        }
        Some(EdgeSampler {
            buffer,
            max_x: i64::from(buffer.width()) - 1,
            max_y: i64::from(buffer.height()) - 1,
        })
    }

    /// The sampled buffer.
    #[inline]
    pub fn buffer(&self) -> &'a PixelBuffer<P> {
        self.buffer
    }

    /// Clamp a column index into `0..width`.
    #[inline]
    pub fn clamp_x(&self, x: i64) -> u32 {
        x.clamp(0, self.max_x) as u32
    }

    /// Clamp a row index into `0..height`.
    #[inline]
    pub fn clamp_y(&self, y: i64) -> u32 {
        y.clamp(0, self.max_y) as u32
    }

    /// Pixel at (x, y), with both coordinates clamped to the buffer.
    #[inline]
    pub fn sample(&self, x: i64, y: i64) -> P {
        self.buffer.get_unchecked(self.clamp_x(x), self.clamp_y(y))
    }

    /// The 3x3 window centered on (x, y).
    pub fn window(&self, x: u32, y: u32) -> NeighborWindow<P> {
        let (x, y) = (i64::from(x), i64::from(y));
        NeighborWindow {
            a: self.sample(x - 1, y - 1),
            b: self.sample(x, y - 1),
            c: self.sample(x + 1, y - 1),
            d: self.sample(x - 1, y),
            e: self.sample(x, y),
            f: self.sample(x + 1, y),
            g: self.sample(x - 1, y + 1),
            h: self.sample(x, y + 1),
            i: self.sample(x + 1, y + 1),
        }
    }
}

/// Pixel at (x, y) clamped to the buffer, or `None` if the buffer is empty.
pub fn sample_clamped<P: Pixel>(buffer: &PixelBuffer<P>, x: i64, y: i64) -> Option<P> {
    EdgeSampler::new(buffer).map(|s| s.sample(x, y))
}

/// The 3x3 neighborhood of a center pixel `e`
///
/// ```text
/// a b c
/// d e f
/// g h i
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborWindow<P> {
    pub a: P,
    pub b: P,
    pub c: P,
    pub d: P,
    pub e: P,
    pub f: P,
    pub g: P,
    pub h: P,
    pub i: P,
}

impl<P: Copy> NeighborWindow<P> {
    /// The center and its four orthogonal neighbors as `(b, d, e, f, h)`.
    #[inline]
    pub fn orthogonal(&self) -> (P, P, P, P, P) {
        (self.b, self.d, self.e, self.f, self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::Bgr32;

    fn gradient(w: u32, h: u32) -> PixelBuffer<Bgr32> {
        let mut buf = PixelBuffer::new(w, h).unwrap();
        for y in 0..h {
            for x in 0..w {
                buf.set_unchecked(x, y, Bgr32::new(x as u8, y as u8, 0));
            }
        }
        buf
    }

    #[test]
    fn test_clamp_policy() {
        let buf = gradient(3, 2);
        let s = EdgeSampler::new(&buf).unwrap();
        assert_eq!(s.sample(-5, -5), Bgr32::new(0, 0, 0));
        assert_eq!(s.sample(5, 0), Bgr32::new(2, 0, 0));
        assert_eq!(s.sample(1, 9), Bgr32::new(1, 1, 0));
        assert_eq!(s.sample(1, 1), Bgr32::new(1, 1, 0));
    }

    #[test]
    fn test_window_at_corner() {
        let buf = gradient(3, 3);
        let win = EdgeSampler::new(&buf).unwrap().window(0, 0);
        assert_eq!(win.a, win.e);
        assert_eq!(win.b, win.e);
        assert_eq!(win.d, win.e);
        assert_eq!(win.f, Bgr32::new(1, 0, 0));
        assert_eq!(win.h, Bgr32::new(0, 1, 0));
        assert_eq!(win.i, Bgr32::new(1, 1, 0));
    }

    #[test]
    fn test_single_pixel_window() {
        let buf = PixelBuffer::new_filled(1, 1, Bgr32::WHITE).unwrap();
        let win = EdgeSampler::new(&buf).unwrap().window(0, 0);
        let (b, d, e, f, h) = win.orthogonal();
        assert!([win.a, b, win.c, d, e, f, win.g, h, win.i]
            .iter()
            .all(|&p| p == Bgr32::WHITE));
    }

    #[test]
    fn test_empty_buffer_has_no_sampler() {
        let buf = PixelBuffer::<Bgr32>::new(0, 4).unwrap();
        assert!(EdgeSampler::new(&buf).is_none());
        assert_eq!(sample_clamped(&buf, 0, 0), None);
    }
}
