//! The three passes of the separable distance transform.
//!
//! The horizontal and vertical passes each produce a 1-D partial distance
//! buffer, downsampled along their own axis only. The merge pass combines
//! both partials with a local neighborhood search to approximate the true
//! 2-D nearest-boundary distance at `O(delta)` per pixel instead of
//! `O(delta^2)`.
//!
//! Each pass is a pure map over its output index space: every element is
//! computed from read-only inputs, so rows are distributed across worker
//! threads without synchronization.

use rayon::prelude::*;

use super::encode::encode_row;
use crate::math::{flat_clamped, mad};

/// Distance reported when no opposite-sign pixel lies within the window.
pub(crate) const NO_BOUNDARY: u8 = u8::MAX;

/// Computes the horizontal partial buffer (`out_width` x `height`).
///
/// Element `(ox, y)` holds the distance from the sample point
/// `(ox * downscale + downscale / 2, y)` to the nearest opposite-sign pixel
/// within `delta` along that row, capped at 255.
pub(crate) fn horizontal_pass(
    source: &[u8],
    width: usize,
    height: usize,
    out_width: usize,
    downscale: usize,
    delta: usize,
) -> Vec<u8> {
    let mut out = vec![0u8; out_width * height];
    out.par_chunks_mut(out_width)
        .enumerate()
        .for_each(|(y, row)| {
            for (ox, cell) in row.iter_mut().enumerate() {
                let center_x = mad(ox, downscale, downscale / 2);
                *cell = horizontal_distance(source, width, center_x, y, delta);
            }
        });
    out
}

/// Computes the vertical partial buffer (`width` x `out_height`).
///
/// Symmetric to [`horizontal_pass`], scanning along columns.
pub(crate) fn vertical_pass(
    source: &[u8],
    width: usize,
    out_height: usize,
    downscale: usize,
    delta: usize,
) -> Vec<u8> {
    let mut out = vec![0u8; width * out_height];
    out.par_chunks_mut(width)
        .enumerate()
        .for_each(|(oy, row)| {
            let center_y = mad(oy, downscale, downscale / 2);
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = vertical_distance(source, width, x, center_y, delta);
            }
        });
    out
}

/// Nearest opposite-sign pixel along the row through `(center_x, center_y)`.
///
/// The scan window is clamped on the flattened array index rather than on
/// the row, so at the first and last rows of the image the window can read
/// pixels from the adjacent row.
fn horizontal_distance(
    source: &[u8],
    pitch: usize,
    center_x: usize,
    center_y: usize,
    delta: usize,
) -> u8 {
    let b = source[mad(center_y, pitch, center_x)];
    let row = (center_y * pitch) as isize;
    let cx = center_x as isize;
    let delta = delta as isize;

    let mut closest = NO_BOUNDARY;
    for x in (cx - delta)..=(cx + delta) {
        let i = flat_clamped(row + x, source.len());
        if source[i] != b {
            let dist = (cx - x).unsigned_abs().min(255) as u8;
            if dist < closest {
                closest = dist;
            }
        }
    }
    closest
}

/// Nearest opposite-sign pixel along the column through `(center_x, center_y)`.
///
/// Same flattened-index clamp as [`horizontal_distance`].
fn vertical_distance(
    source: &[u8],
    pitch: usize,
    center_x: usize,
    center_y: usize,
    delta: usize,
) -> u8 {
    let b = source[mad(center_y, pitch, center_x)];
    let cy = center_y as isize;
    let delta = delta as isize;

    let mut closest = NO_BOUNDARY;
    for y in (cy - delta)..=(cy + delta) {
        let i = flat_clamped(y * pitch as isize + center_x as isize, source.len());
        if source[i] != b {
            let dist = (cy - y).unsigned_abs().min(255) as u8;
            if dist < closest {
                closest = dist;
            }
        }
    }
    closest
}

/// Combines the two partial buffers into the final encoded field.
#[allow(clippy::too_many_arguments)]
pub(crate) fn merge_pass(
    source: &[u8],
    horizontal: &[u8],
    vertical: &[u8],
    width: usize,
    height: usize,
    out_width: usize,
    out_height: usize,
    downscale: usize,
    delta: usize,
    spread: f32,
) -> Vec<u8> {
    let mut out = vec![0u8; out_width * out_height];
    out.par_chunks_mut(out_width)
        .enumerate()
        .for_each(|(oy, row)| {
            let mut square_dists = vec![0.0f32; out_width];
            let mut signs = vec![0.0f32; out_width];
            for ox in 0..out_width {
                let (sq, inside) = merge_distance(
                    source, horizontal, vertical, width, height, out_width, downscale, delta, ox,
                    oy,
                );
                square_dists[ox] = sq as f32;
                signs[ox] = if inside { 1.0 } else { -1.0 };
            }
            encode_row(&square_dists, &signs, spread, row);
        });
    out
}

/// Approximates the squared 2-D distance to the nearest boundary at one
/// output pixel, plus the inside/outside sign at the block center.
///
/// Scans the horizontal partial along the column through the block center
/// and the vertical partial along the row through it, combining the stored
/// 1-D distance with the perpendicular offset of each sample.
#[allow(clippy::too_many_arguments)]
fn merge_distance(
    source: &[u8],
    horizontal: &[u8],
    vertical: &[u8],
    width: usize,
    height: usize,
    out_width: usize,
    downscale: usize,
    delta: usize,
    ox: usize,
    oy: usize,
) -> (i32, bool) {
    // The horizontal partial is already downsampled in x, so its x index is
    // the output column itself; the vertical partial mirrors this in y.
    let center_xx = ox;
    let center_yx = mad(oy, downscale, downscale / 2);
    let center_xy = mad(ox, downscale, downscale / 2);
    let center_yy = oy;

    let inside = source[mad(center_yx, width, center_xy)] != 0;

    let start_y = center_yx.saturating_sub(delta);
    let end_y = (height - 1).min(center_yx + delta);
    let start_x = center_xy.saturating_sub(delta);
    let end_x = (width - 1).min(center_xy + delta);

    let mut closest = i32::MAX;

    for y in start_y..=end_y {
        let d = horizontal[mad(y, out_width, center_xx)] as i32;
        let dy = center_yx as i32 - y as i32;
        let sq = dy * dy + d * d;
        if sq < closest {
            closest = sq;
        }
    }

    for x in start_x..=end_x {
        let d = vertical[mad(center_yy, width, x)] as i32;
        let dx = center_xy as i32 - x as i32;
        let sq = dx * dx + d * d;
        if sq < closest {
            closest = sq;
        }
    }

    (closest, inside)
}
