//! Deterministic test patterns

use crate::error::{TestError, TestResult};
use scalex_core::{Bgr32, Pixel, PixelBuffer};

/// Simple linear congruential generator for reproducible patterns
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        Self {
            state: u64::from(seed),
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        // LCG parameters from Numerical Recipes
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }

    /// Next value in `0..bound`.
    pub fn below(&mut self, bound: usize) -> usize {
        ((self.next_u64() >> 33) % bound as u64) as usize
    }

    pub fn next_u8(&mut self) -> u8 {
        (self.next_u64() >> 56) as u8
    }
}

/// A buffer of uniformly random bytes, padding included.
pub fn noise<P: Pixel>(width: u32, height: u32, seed: u32) -> TestResult<PixelBuffer<P>> {
    let mut buf = PixelBuffer::new(width, height)?;
    let mut rng = SimpleRng::new(seed);
    for byte in buf.as_bytes_mut() {
        *byte = rng.next_u8();
    }
    Ok(buf)
}

/// A buffer whose pixels are drawn from a small palette.
///
/// Few distinct colors produce many equal neighbors, which is what the
/// edge rules of the pixel-art scalers react to.
pub fn palette_noise<P: Pixel>(
    width: u32,
    height: u32,
    palette: &[P],
    seed: u32,
) -> TestResult<PixelBuffer<P>> {
    if palette.is_empty() {
        return Err(TestError::EmptyPalette);
    }
    let mut buf = PixelBuffer::new(width, height)?;
    let mut rng = SimpleRng::new(seed);
    for y in 0..height {
        for p in buf.row_mut(y) {
            *p = palette[rng.below(palette.len())];
        }
    }
    Ok(buf)
}

/// A 400x400 white scene with a blue 340x340 square at (30, 30).
pub fn benchmark_scene() -> TestResult<PixelBuffer<Bgr32>> {
    let mut buf = PixelBuffer::new_filled(400, 400, Bgr32::WHITE)?;
    let blue = Bgr32::new(0, 0, 255);
    for y in 30..370 {
        buf.row_mut(y)[30..370].fill(blue);
    }
    Ok(buf)
}
