//! Scale2x (EPX) upscaling
//!
//! Each source pixel `E` becomes a 2x2 block chosen from `E` and its
//! orthogonal neighbors:
//!
//! ```text
//!     B          E0 E1
//!   D E F   ->   E2 E3
//!     H
//! ```
//!
//! A block corner copies a neighbor only where two adjacent neighbors agree
//! and the opposite ones do not, which rounds off staircase edges without
//! blurring.

use crate::TransformResult;
use crate::pixel_art::scaled_target;
use scalex_core::{EdgeSampler, Pixel, PixelBuffer};

/// Scale2x block for center `e` with neighbors up `b`, left `d`, right `f`
/// and down `h`, in the factored form.
///
/// Returns `[E0, E1, E2, E3]` in row-major order.
#[inline]
fn expand<P: Pixel>(b: P, d: P, e: P, f: P, h: P) -> [P; 4] {
    if b != h && d != f {
        [
            if d == b { d } else { e },
            if b == f { f } else { e },
            if d == h { d } else { e },
            if h == f { f } else { e },
        ]
    } else {
        [e; 4]
    }
}

/// Upscale by 2 with the Scale2x rule.
///
/// Walks the source a row at a time with the rows above and below cached,
/// filling one 2-row destination band per source row. With the `parallel`
/// feature bands are filled concurrently. Output is identical to
/// [`scale2x_reference`].
///
/// # Examples
///
/// ```
/// use scalex_core::{Bgr32, PixelBuffer};
/// use scalex_transform::scale2x;
///
/// let src = PixelBuffer::new_filled(3, 2, Bgr32::WHITE).unwrap();
/// let out = scale2x(&src).unwrap();
/// assert_eq!((out.width(), out.height()), (6, 4));
/// ```
pub fn scale2x<P: Pixel>(src: &PixelBuffer<P>) -> TransformResult<PixelBuffer<P>> {
    let mut dst = scaled_target(src, 2)?;
    log::debug!(
        "scale2x: {}x{} -> {}x{}",
        src.width(),
        src.height(),
        dst.width(),
        dst.height()
    );
    if src.is_empty() {
        log::trace!("scale2x: empty source");
        return Ok(dst);
    }

    let last_x = src.width() as usize - 1;
    let last_y = src.height() - 1;

    dst.for_each_row_band(2, |mut band| {
        let y = band.first_row() / 2;
        let above = src.row(y.saturating_sub(1));
        let row = src.row(y);
        let below = src.row((y + 1).min(last_y));

        let mut rows = band.rows_mut();
        let (Some(top), Some(bottom)) = (rows.next(), rows.next()) else {
            return;
        };

        for (x, (t, u)) in top
            .chunks_exact_mut(2)
            .zip(bottom.chunks_exact_mut(2))
            .enumerate()
        {
            let d = row[x.saturating_sub(1)];
            let f = row[(x + 1).min(last_x)];
            let [e0, e1, e2, e3] = expand(above[x], d, row[x], f, below[x]);
            t[0] = e0;
            t[1] = e1;
            u[0] = e2;
            u[1] = e3;
        }
    });

    Ok(dst)
}

/// Upscale by 2, applying the Scale2x rule literally one pixel at a time.
///
/// Every neighbor is read through [`EdgeSampler`] and every output pixel is
/// written with a bounds-checked [`PixelBuffer::set`]. This is the baseline
/// [`scale2x`] is checked against.
pub fn scale2x_reference<P: Pixel>(src: &PixelBuffer<P>) -> TransformResult<PixelBuffer<P>> {
    let mut dst = scaled_target(src, 2)?;
    let Some(sampler) = EdgeSampler::new(src) else {
        log::trace!("scale2x_reference: empty source");
        return Ok(dst);
    };

    for y in 0..src.height() {
        for x in 0..src.width() {
            let (b, d, e, f, h) = sampler.window(x, y).orthogonal();

            let e0 = if d == b && d != h && b != f { d } else { e };
            let e1 = if b == f && b != d && f != h { f } else { e };
            let e2 = if d == h && d != b && h != f { d } else { e };
            let e3 = if h == f && d != f && h != b { f } else { e };

            dst.set(2 * x, 2 * y, e0)?;
            dst.set(2 * x + 1, 2 * y, e1)?;
            dst.set(2 * x, 2 * y + 1, e2)?;
            dst.set(2 * x + 1, 2 * y + 1, e3)?;
        }
    }

    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scalex_core::{Bgr32, Bgra32};

    const K: Bgr32 = Bgr32::BLACK;
    const W: Bgr32 = Bgr32::WHITE;

    fn from_rows(rows: &[&str]) -> PixelBuffer<Bgr32> {
        let mut buf = PixelBuffer::new(rows[0].len() as u32, rows.len() as u32).unwrap();
        for (y, line) in rows.iter().enumerate() {
            for (x, c) in line.chars().enumerate() {
                let p = if c == 'K' { K } else { W };
                buf.set(x as u32, y as u32, p).unwrap();
            }
        }
        buf
    }

    #[test]
    fn test_expand_uniform() {
        assert_eq!(expand(W, W, W, W, W), [W; 4]);
    }

    #[test]
    fn test_expand_corner() {
        // Up and left agree: the top-left output takes their color
        assert_eq!(expand(K, K, W, W, W), [K, W, W, W]);
    }

    #[test]
    fn test_diagonal_line() {
        let src = from_rows(&["KWW", "WKW", "WWK"]);
        let expected = from_rows(&[
            "KKWWWW", "KWKWWW", "WKKKWW", "WWKKKW", "WWWKWK", "WWWWKK",
        ]);
        let fast = scale2x(&src).unwrap();
        let slow = scale2x_reference(&src).unwrap();
        assert_eq!(fast.as_bytes(), expected.as_bytes());
        assert_eq!(slow.as_bytes(), expected.as_bytes());
    }

    #[test]
    fn test_distinct_pixels_become_blocks() {
        let colors = [
            Bgra32::new(255, 0, 0, 255),
            Bgra32::new(0, 255, 0, 255),
            Bgra32::new(0, 0, 255, 255),
            Bgra32::new(255, 255, 0, 255),
        ];
        let mut src = PixelBuffer::new(2, 2).unwrap();
        for (i, &c) in colors.iter().enumerate() {
            src.set(i as u32 % 2, i as u32 / 2, c).unwrap();
        }
        let out = scale2x(&src).unwrap();
        for y in 0..4 {
            for x in 0..4 {
                let expected = colors[(y / 2 * 2 + x / 2) as usize];
                assert_eq!(out.get(x, y).unwrap(), expected);
            }
        }
    }

    #[test]
    fn test_single_pixel() {
        let src = PixelBuffer::new_filled(1, 1, K).unwrap();
        let out = scale2x(&src).unwrap();
        assert_eq!((out.width(), out.height()), (2, 2));
        assert!(out.rows().flatten().all(|&p| p == K));
    }

    #[test]
    fn test_empty_source() {
        let src = PixelBuffer::<Bgr32>::new(0, 3).unwrap();
        let out = scale2x(&src).unwrap();
        assert_eq!((out.width(), out.height()), (0, 6));
        let out = scale2x_reference(&src).unwrap();
        assert_eq!((out.width(), out.height()), (0, 6));
    }

    #[test]
    fn test_source_unchanged() {
        let src = from_rows(&["KWK", "WKW"]);
        let before = src.clone();
        let _ = scale2x(&src).unwrap();
        assert_eq!(src.as_bytes(), before.as_bytes());
    }
}
