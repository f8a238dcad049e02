//! Row-parallel image fill.

use lfd_core::{Color, Image};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Calls `f(y, row)` once per scanline of `image`.
///
/// Rows are disjoint, so with the `parallel` feature they are filled
/// concurrently.
#[cfg(feature = "parallel")]
pub(crate) fn fill_rows<F>(image: &mut Image, f: F)
where
    F: Fn(usize, &mut [Color]) + Sync + Send,
{
    let width = image.width();
    if width == 0 {
        return;
    }
    image
        .data_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| f(y, row));
}

/// Calls `f(y, row)` once per scanline of `image` (single-threaded fallback).
#[cfg(not(feature = "parallel"))]
pub(crate) fn fill_rows<F>(image: &mut Image, f: F)
where
    F: Fn(usize, &mut [Color]),
{
    if image.width() == 0 {
        return;
    }
    for (y, row) in image.rows_mut().enumerate() {
        f(y, row);
    }
}
