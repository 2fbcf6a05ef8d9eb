//! Scale3x (AdvMAME3x) upscaling
//!
//! Each source pixel `E` becomes a 3x3 block decided by its full
//! neighborhood:
//!
//! ```text
//!   A B C        E0 E1 E2
//!   D E F   ->   E3 E4 E5
//!   G H I        E6 E7 E8
//! ```
//!
//! The center output is always `E`. Corner outputs follow the Scale2x
//! test; edge outputs additionally require the diagonal neighbor on their
//! side to differ from `E`, so a line of one-pixel width does not grow a
//! spur at its ends.

use crate::TransformResult;
use crate::pixel_art::scaled_target;
use scalex_core::{EdgeSampler, NeighborWindow, Pixel, PixelBuffer};

/// Scale3x block for a neighborhood, in the factored form.
///
/// Returns `[E0, ..., E8]` in row-major order.
#[inline]
fn expand<P: Pixel>(w: &NeighborWindow<P>) -> [P; 9] {
    let NeighborWindow {
        a,
        b,
        c,
        d,
        e,
        f,
        g,
        h,
        i,
    } = *w;
    if b == h || d == f {
        return [e; 9];
    }
    let pick = |cond: bool, p: P| if cond { p } else { e };
    [
        pick(d == b, d),
        pick((d == b && e != c) || (b == f && e != a), b),
        pick(b == f, f),
        pick((d == b && e != g) || (d == h && e != a), d),
        e,
        pick((b == f && e != i) || (h == f && e != c), f),
        pick(d == h, d),
        pick((d == h && e != i) || (h == f && e != g), h),
        pick(h == f, f),
    ]
}

/// Upscale by 3 with the Scale3x rule.
///
/// Fills one 3-row destination band per source row from cached row slices,
/// concurrently with the `parallel` feature. Output is identical to
/// [`scale3x_reference`].
pub fn scale3x<P: Pixel>(src: &PixelBuffer<P>) -> TransformResult<PixelBuffer<P>> {
    let mut dst = scaled_target(src, 3)?;
    log::debug!(
        "scale3x: {}x{} -> {}x{}",
        src.width(),
        src.height(),
        dst.width(),
        dst.height()
    );
    if src.is_empty() {
        log::trace!("scale3x: empty source");
        return Ok(dst);
    }

    let last_x = src.width() as usize - 1;
    let last_y = src.height() - 1;

    dst.for_each_row_band(3, |mut band| {
        let y = band.first_row() / 3;
        let above = src.row(y.saturating_sub(1));
        let row = src.row(y);
        let below = src.row((y + 1).min(last_y));

        let mut rows = band.rows_mut();
        let (Some(top), Some(mid), Some(bottom)) = (rows.next(), rows.next(), rows.next()) else {
            return;
        };

        let outputs = top
            .chunks_exact_mut(3)
            .zip(mid.chunks_exact_mut(3))
            .zip(bottom.chunks_exact_mut(3));
        for (x, ((t, m), u)) in outputs.enumerate() {
            let left = x.saturating_sub(1);
            let right = (x + 1).min(last_x);
            let window = NeighborWindow {
                a: above[left],
                b: above[x],
                c: above[right],
                d: row[left],
                e: row[x],
                f: row[right],
                g: below[left],
                h: below[x],
                i: below[right],
            };
            let out = expand(&window);
            t.copy_from_slice(&out[0..3]);
            m.copy_from_slice(&out[3..6]);
            u.copy_from_slice(&out[6..9]);
        }
    });

    Ok(dst)
}

/// Upscale by 3, applying the Scale3x rule literally one pixel at a time.
///
/// The baseline [`scale3x`] is checked against: neighbors come from
/// [`EdgeSampler::window`] and outputs are written with
/// [`PixelBuffer::set`].
pub fn scale3x_reference<P: Pixel>(src: &PixelBuffer<P>) -> TransformResult<PixelBuffer<P>> {
    let mut dst = scaled_target(src, 3)?;
    let Some(sampler) = EdgeSampler::new(src) else {
        log::trace!("scale3x_reference: empty source");
        return Ok(dst);
    };

    for y in 0..src.height() {
        for x in 0..src.width() {
            let NeighborWindow {
                a,
                b,
                c,
                d,
                e,
                f,
                g,
                h,
                i,
            } = sampler.window(x, y);

            let db = d == b && b != f && d != h;
            let bf = b == f && b != d && f != h;
            let dh = d == h && d != b && h != f;
            let hf = h == f && d != f && h != b;

            let block = [
                if db { d } else { e },
                if (db && e != c) || (bf && e != a) { b } else { e },
                if bf { f } else { e },
                if (db && e != g) || (dh && e != a) { d } else { e },
                e,
                if (bf && e != i) || (hf && e != c) { f } else { e },
                if dh { d } else { e },
                if (dh && e != i) || (hf && e != g) { h } else { e },
                if hf { f } else { e },
            ];

            for (k, &p) in block.iter().enumerate() {
                let k = k as u32;
                dst.set(3 * x + k % 3, 3 * y + k / 3, p)?;
            }
        }
    }

    Ok(dst)
}
