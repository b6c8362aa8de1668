//! Numeric helpers shared by the distance field passes.

use num_traits::Float;

/// Multiply-add on indices: `a * b + c`.
#[inline]
pub(crate) fn mad(a: usize, b: usize, c: usize) -> usize {
    a * b + c
}

/// Multiply-add on floats: `a * b + c`.
#[inline]
pub(crate) fn madf<F: Float>(a: F, b: F, c: F) -> F {
    a.mul_add(b, c)
}

/// Clamps a flattened (possibly negative) pixel index into `[0, len - 1]`.
///
/// The clamp operates on the flattened index, not on the row containing it:
/// a scan window that runs past the first or last pixel of a row lands in
/// the adjacent row instead of being pinned to the row edge.
#[inline]
pub(crate) fn flat_clamped(index: isize, len: usize) -> usize {
    index.clamp(0, len as isize - 1) as usize
}
