//! Distance field generation entry point.

use log::debug;

use super::grid::DistanceField;
use super::passes::{horizontal_pass, merge_pass, vertical_pass};
use crate::error::SdfError;

/// Maximum representable spread, in source pixels.
///
/// Larger requested spreads are clamped; surfacing a warning for that is
/// left to the caller.
pub const MAX_SPREAD: f32 = 127.0;

/// Generates a signed distance field from a binary alpha bitmap.
///
/// `source` is a row-major buffer of `width * height` pixels, each 0
/// (outside) or 255 (inside). The output is downsampled by `downscale` in
/// both axes, truncating any trailing partial row or column, and encodes
/// the signed distance to the nearest inside/outside boundary: 128 marks
/// the boundary itself, inside pixels rise toward 255 and outside pixels
/// fall toward 0, saturating once the distance reaches `spread`.
///
/// The transform runs in three data-parallel passes: two axis-aligned
/// prepasses that each downsample one axis, then a merge that combines the
/// partials into the 2-D field. The horizontal and vertical prepasses run
/// concurrently; the merge starts once both have completed.
///
/// # Arguments
///
/// * `source` - Binary pixel buffer, `width * height` bytes
/// * `width` - Source width in pixels
/// * `height` - Source height in pixels
/// * `spread` - Maximum encoded distance in source pixels, clamped to
///   `[0, MAX_SPREAD]`
/// * `downscale` - Output resolution divisor, at least 1
///
/// # Errors
///
/// Fails fast on a source/dimension mismatch, a zero downscale factor, or
/// an output truncated to zero pixels. A complete, correctly sized buffer
/// is produced or none at all.
///
/// # Example
///
/// ```
/// use imgsdf::generate_distance_field;
///
/// // 8x8 bitmap with an inside block in the middle.
/// let mut source = vec![0u8; 64];
/// for y in 3..=4 {
///     for x in 3..=4 {
///         source[y * 8 + x] = 255;
///     }
/// }
///
/// let field = generate_distance_field(&source, 8, 8, 4.0, 1).unwrap();
/// assert_eq!((field.width(), field.height()), (8, 8));
/// assert!(field.get(3, 3) > 128); // inside
/// assert!(field.get(0, 0) < 128); // outside
/// ```
pub fn generate_distance_field(
    source: &[u8],
    width: usize,
    height: usize,
    spread: f32,
    downscale: usize,
) -> Result<DistanceField, SdfError> {
    if source.len() != width * height {
        return Err(SdfError::DimensionMismatch {
            width,
            height,
            expected: width * height,
            actual: source.len(),
        });
    }
    if downscale < 1 {
        return Err(SdfError::InvalidDownscale);
    }

    let out_width = width / downscale;
    let out_height = height / downscale;
    if out_width == 0 || out_height == 0 {
        return Err(SdfError::EmptyOutput {
            width,
            height,
            downscale,
        });
    }

    let spread = spread.clamp(0.0, MAX_SPREAD);
    let delta = spread.ceil() as usize;

    debug!(
        "generating {out_width}x{out_height} field from {width}x{height} source \
         (spread {spread}, delta {delta})"
    );

    let (horizontal, vertical) = rayon::join(
        || horizontal_pass(source, width, height, out_width, downscale, delta),
        || vertical_pass(source, width, out_height, downscale, delta),
    );

    let data = merge_pass(
        source,
        &horizontal,
        &vertical,
        width,
        height,
        out_width,
        out_height,
        downscale,
        delta,
        spread,
    );

    Ok(DistanceField::from_parts(out_width, out_height, spread, data))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_bitmap() -> Vec<u8> {
        // 8x8 all-outside except a 2x2 inside square at (3,3)-(4,4).
        let mut data = vec![0u8; 64];
        for y in 3..=4 {
            for x in 3..=4 {
                data[y * 8 + x] = 255;
            }
        }
        data
    }

    #[test]
    fn test_uniform_outside_is_all_zero() {
        let source = vec![0u8; 32 * 32];
        let field = generate_distance_field(&source, 32, 32, 8.0, 1).unwrap();

        assert!(field.bytes().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_uniform_inside_is_all_max() {
        let source = vec![255u8; 32 * 32];
        let field = generate_distance_field(&source, 32, 32, 8.0, 2).unwrap();

        assert!(field.bytes().iter().all(|&v| v == 255));
    }

    #[test]
    fn test_step_edge_crosses_near_midpoint_and_grows_monotonically() {
        // Left half outside, right half inside, boundary between x=127 and
        // x=128. Two rows so the vertical pass has columns to scan. The
        // assertions stay inside x in [32, 223], where no scan window can
        // cross a row end through the flattened index.
        let width = 256;
        let source: Vec<u8> = (0..width * 2)
            .map(|i| if i % width >= 128 { 255 } else { 0 })
            .collect();

        let field = generate_distance_field(&source, width, 2, 32.0, 1).unwrap();

        // First pixels on either side of the boundary are one step from it.
        let at_edge = field.get(128, 0);
        assert!(
            (120..=136).contains(&at_edge),
            "boundary pixel encodes {at_edge}"
        );
        assert!(field.get(127, 0) < 128);
        assert!(field.get(128, 0) > 127);

        // Encoded values grow monotonically into the shape, then saturate.
        for x in 128..223 {
            assert!(field.get(x + 1, 0) >= field.get(x, 0));
        }
        assert_eq!(field.get(128 + 32, 0), 255);
        assert_eq!(field.get(223, 0), 255);

        // And fall monotonically away from it on the outside.
        for x in 32..127 {
            assert!(field.get(x, 0) <= field.get(x + 1, 0));
        }
        assert_eq!(field.get(96, 0), 0);
        assert_eq!(field.get(32, 0), 0);
    }

    #[test]
    fn test_square_scenario() {
        let field = generate_distance_field(&square_bitmap(), 8, 8, 4.0, 1).unwrap();

        assert_eq!((field.width(), field.height()), (8, 8));

        // Inside the square.
        assert!(field.get(3, 3) > 128);
        assert!(field.get(4, 4) > 128);

        // Beyond the spread in every direction: exactly saturated.
        assert_eq!(field.get(0, 0), 0);
        assert_eq!(field.get(7, 0), 0);
        assert_eq!(field.get(0, 7), 0);
        assert_eq!(field.get(7, 7), 0);
    }

    #[test]
    fn test_far_field_saturates_exactly() {
        // Spread far smaller than the distance to the only boundary.
        let mut source = vec![0u8; 64 * 64];
        source[32 * 64 + 32] = 255;

        let field = generate_distance_field(&source, 64, 64, 2.0, 1).unwrap();

        assert_eq!(field.get(0, 0), 0);
        assert_eq!(field.get(63, 63), 0);
        // Never an overshoot past the clamp.
        assert!(field.bytes().iter().all(|&v| v <= 255));
        assert!(field
            .bytes()
            .iter()
            .enumerate()
            .filter(|(i, _)| {
                let (x, y) = (i % 64, i / 64);
                x.abs_diff(32) > 3 || y.abs_diff(32) > 3
            })
            .all(|(_, &v)| v == 0));
    }

    #[test]
    fn test_repeated_invocations_are_byte_identical() {
        let source: Vec<u8> = (0..96 * 64)
            .map(|i| {
                let (x, y) = (i % 96, i / 96);
                if (x / 7 + y / 5) % 2 == 0 {
                    255
                } else {
                    0
                }
            })
            .collect();

        let a = generate_distance_field(&source, 96, 64, 6.0, 2).unwrap();
        let b = generate_distance_field(&source, 96, 64, 6.0, 2).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_output_dimensions_truncate() {
        for (width, height, downscale) in [
            (10, 7, 3),
            (8, 8, 1),
            (8, 8, 2),
            (9, 9, 2),
            (100, 30, 7),
            (5, 5, 5),
        ] {
            let source = vec![0u8; width * height];
            let field = generate_distance_field(&source, width, height, 4.0, downscale).unwrap();

            assert_eq!(field.width(), width / downscale);
            assert_eq!(field.height(), height / downscale);
            assert_eq!(field.bytes().len(), (width / downscale) * (height / downscale));
        }
    }

    #[test]
    fn test_horizontal_flip_symmetry() {
        // Symmetric square kept far enough from the image edge that the
        // scan windows never leave their own rows.
        let bitmap: Vec<u8> = (0..16 * 16)
            .map(|i| {
                let (x, y) = (i % 16, i / 16);
                if (6..=9).contains(&x) && (6..=9).contains(&y) {
                    255
                } else {
                    0
                }
            })
            .collect();

        let field = generate_distance_field(&bitmap, 16, 16, 3.0, 1).unwrap();

        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(
                    field.get(x, y),
                    field.get(15 - x, y),
                    "asymmetry at ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn test_spread_above_maximum_is_clamped() {
        let source = vec![255u8; 16 * 16];
        let field = generate_distance_field(&source, 16, 16, 500.0, 1).unwrap();

        assert_eq!(field.spread(), MAX_SPREAD);
    }

    #[test]
    fn test_dimension_mismatch_fails_fast() {
        let source = vec![0u8; 63];
        let err = generate_distance_field(&source, 8, 8, 4.0, 1).unwrap_err();

        assert!(matches!(err, SdfError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_zero_downscale_fails_fast() {
        let source = vec![0u8; 64];
        let err = generate_distance_field(&source, 8, 8, 4.0, 0).unwrap_err();

        assert!(matches!(err, SdfError::InvalidDownscale));
    }

    #[test]
    fn test_empty_output_fails_fast() {
        let source = vec![0u8; 4];
        let err = generate_distance_field(&source, 2, 2, 4.0, 4).unwrap_err();

        assert!(matches!(err, SdfError::EmptyOutput { downscale: 4, .. }));
    }
}
