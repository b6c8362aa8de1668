//! Final sign, clamp and 8-bit encoding of merged square distances.
//!
//! Distances are normalized so the inside/outside boundary sits at the
//! middle of the byte range, with inside pixels above it and outside pixels
//! below, saturating once the distance reaches the spread.

use crate::math::madf;

/// Encodes one squared distance and its sign into a distance byte.
///
/// A non-positive spread saturates everything: inside encodes 255 and
/// outside 0.
#[inline]
pub(crate) fn encode_pixel(square_dist: f32, sign: f32, spread: f32) -> u8 {
    if spread <= 0.0 {
        return if sign > 0.0 { 255 } else { 0 };
    }
    let closest = sign * square_dist.sqrt().min(spread);
    let norm = madf(closest / spread, 0.5, 0.5).clamp(0.0, 1.0);
    (norm * 255.0) as u8
}

/// Encodes a row of merged square distances into output bytes.
#[cfg(not(feature = "simd"))]
pub(crate) fn encode_row(square_dists: &[f32], signs: &[f32], spread: f32, out: &mut [u8]) {
    for (i, cell) in out.iter_mut().enumerate() {
        *cell = encode_pixel(square_dists[i], signs[i], spread);
    }
}

/// Encodes a row of merged square distances into output bytes.
///
/// Processes pixels in batches of 8 lanes, falling back to the scalar
/// encoder for the remainder.
#[cfg(feature = "simd")]
pub(crate) fn encode_row(square_dists: &[f32], signs: &[f32], spread: f32, out: &mut [u8]) {
    use wide::f32x8;

    if spread <= 0.0 {
        for (i, cell) in out.iter_mut().enumerate() {
            *cell = encode_pixel(square_dists[i], signs[i], spread);
        }
        return;
    }

    let spread_v = f32x8::splat(spread);
    let half = f32x8::splat(0.5);
    let zero = f32x8::splat(0.0);
    let one = f32x8::splat(1.0);
    let scale = f32x8::splat(255.0);

    let chunks = out.len() / 8;
    for chunk in 0..chunks {
        let base = chunk * 8;

        let mut sq = [0.0f32; 8];
        sq.copy_from_slice(&square_dists[base..base + 8]);
        let mut sg = [0.0f32; 8];
        sg.copy_from_slice(&signs[base..base + 8]);

        let dist = f32x8::from(sq).sqrt().min(spread_v) * f32x8::from(sg);
        let norm = (dist / spread_v * half + half).max(zero).min(one);
        let bytes = (norm * scale).to_array();
        for (j, &v) in bytes.iter().enumerate() {
            out[base + j] = v as u8;
        }
    }

    // Handle remainder
    for i in (chunks * 8)..out.len() {
        out[i] = encode_pixel(square_dists[i], signs[i], spread);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_pixel_zero_distance_is_midpoint() {
        // Distance zero sits at the boundary encoding, regardless of sign.
        assert_eq!(encode_pixel(0.0, 1.0, 4.0), 127);
        assert_eq!(encode_pixel(0.0, -1.0, 4.0), 127);
    }

    #[test]
    fn test_encode_pixel_saturates_at_spread() {
        // 10 pixels away with a spread of 4: fully saturated.
        assert_eq!(encode_pixel(100.0, 1.0, 4.0), 255);
        assert_eq!(encode_pixel(100.0, -1.0, 4.0), 0);
    }

    #[test]
    fn test_encode_pixel_interior_values() {
        // Distance 2 with spread 4: a quarter of the range from the middle.
        assert_eq!(encode_pixel(4.0, 1.0, 4.0), 191);
        assert_eq!(encode_pixel(4.0, -1.0, 4.0), 63);
    }

    #[test]
    fn test_encode_pixel_zero_spread_saturates_by_sign() {
        assert_eq!(encode_pixel(9.0, 1.0, 0.0), 255);
        assert_eq!(encode_pixel(9.0, -1.0, 0.0), 0);
    }

    #[test]
    fn test_encode_row_matches_scalar_encoder() {
        let square_dists: Vec<f32> = (0..19).map(|i| (i * i) as f32).collect();
        let signs: Vec<f32> = (0..19).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();

        let mut row = vec![0u8; 19];
        encode_row(&square_dists, &signs, 12.0, &mut row);

        for i in 0..19 {
            assert_eq!(row[i], encode_pixel(square_dists[i], signs[i], 12.0));
        }
    }
}
