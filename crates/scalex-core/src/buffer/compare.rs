//! Buffer comparison and counting
//!
//! Whole-buffer reductions that split the work into independent rows:
//!
//! - [`count_matching`] - count pixels of one color
//! - [`compare_buffers`] - pixel-wise equality with a diagnostic
//! - [`buffers_equal`] - the boolean form of [`compare_buffers`]
//!
//! With the `parallel` feature rows are scanned on the rayon thread pool.
//! Per-row results are combined with order-independent operations, so the
//! outcome never depends on the number of workers.

use super::PixelBuffer;
use crate::pixel::{Pixel, PixelFormat};
use std::sync::atomic::{AtomicBool, Ordering};

/// Outcome of [`compare_buffers`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferComparison {
    /// Every pixel matches
    Equal,
    /// Widths or heights differ; no pixels were compared
    DimensionMismatch {
        first: (u32, u32),
        second: (u32, u32),
    },
    /// Pixel layouts differ; no pixels were compared
    FormatMismatch {
        first: PixelFormat,
        second: PixelFormat,
    },
    /// A differing pixel. When several differ, which one is reported is
    /// unspecified.
    PixelMismatch { x: u32, y: u32 },
}

impl BufferComparison {
    /// Whether the buffers compared equal.
    #[inline]
    pub fn is_equal(&self) -> bool {
        matches!(self, BufferComparison::Equal)
    }
}

/// Count the pixels whose color equals `target`.
///
/// The alpha channel takes part only when `include_alpha` is set and the
/// layout has one; padding bytes never do.
///
/// # Examples
///
/// ```
/// use scalex_core::{Bgra32, PixelBuffer, count_matching};
///
/// let buf = PixelBuffer::new_filled(4, 4, Bgra32::WHITE).unwrap();
/// assert_eq!(count_matching(&buf, Bgra32::WHITE, true), 16);
/// assert_eq!(count_matching(&buf, Bgra32::BLACK, true), 0);
/// ```
pub fn count_matching<P: Pixel>(buffer: &PixelBuffer<P>, target: P, include_alpha: bool) -> u64 {
    let count_row = |y: u32| {
        buffer
            .row(y)
            .iter()
            .filter(|p| p.same_color(&target, include_alpha))
            .count() as u64
    };

    #[cfg(feature = "parallel")]
    let total = {
        use rayon::prelude::*;
        (0..buffer.height()).into_par_iter().map(count_row).sum::<u64>()
    };

    #[cfg(not(feature = "parallel"))]
    let total = (0..buffer.height()).map(count_row).sum::<u64>();

    total
}

/// Compare two buffers pixel by pixel.
///
/// Size and layout are checked first and reported without scanning any
/// pixel. Otherwise rows are scanned concurrently; the first worker to hit a
/// differing pixel raises a shared stop flag and the remaining rows are
/// skipped. Alpha is compared only when both layouts carry it.
pub fn compare_buffers<P: Pixel, Q: Pixel>(
    first: &PixelBuffer<P>,
    second: &PixelBuffer<Q>,
) -> BufferComparison {
    if !first.sizes_equal(second) {
        log::debug!(
            "different sizes: {}x{} vs {}x{}",
            first.width(),
            first.height(),
            second.width(),
            second.height()
        );
        return BufferComparison::DimensionMismatch {
            first: (first.width(), first.height()),
            second: (second.width(), second.height()),
        };
    }

    if P::FORMAT != Q::FORMAT {
        log::debug!(
            "different pixel formats: {:?} vs {:?}",
            P::FORMAT,
            Q::FORMAT
        );
        return BufferComparison::FormatMismatch {
            first: P::FORMAT,
            second: Q::FORMAT,
        };
    }

    let format = P::FORMAT;
    let include_alpha = P::FORMAT.has_alpha() && Q::FORMAT.has_alpha();
    let stop = AtomicBool::new(false);

    let scan_row = |y: u32| -> Option<(u32, u32)> {
        if stop.load(Ordering::Relaxed) {
            return None;
        }
        let x = first
            .row(y)
            .iter()
            .zip(second.row(y))
            .position(|(a, b)| !format.same_color(a.channels(), b.channels(), include_alpha))?;
        stop.store(true, Ordering::Relaxed);
        Some((x as u32, y))
    };

    #[cfg(feature = "parallel")]
    let mismatch = {
        use rayon::prelude::*;
        (0..first.height()).into_par_iter().find_map_any(scan_row)
    };

    #[cfg(not(feature = "parallel"))]
    let mismatch = (0..first.height()).find_map(scan_row);

    match mismatch {
        Some((x, y)) => {
            log::debug!("different colors at {x},{y}");
            BufferComparison::PixelMismatch { x, y }
        }
        None => BufferComparison::Equal,
    }
}

/// Check whether two buffers hold the same pixels.
///
/// Returns `false` for buffers of different size or layout; use
/// [`compare_buffers`] to tell the cases apart.
pub fn buffers_equal<P: Pixel, Q: Pixel>(first: &PixelBuffer<P>, second: &PixelBuffer<Q>) -> bool {
    compare_buffers(first, second).is_equal()
}
