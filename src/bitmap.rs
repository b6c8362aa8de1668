//! Binary alpha bitmaps consumed by the distance field generator.

use crate::error::SdfError;
use crate::field::DistanceField;

/// The pixel value marking the inside of a shape.
pub const INSIDE: u8 = 255;

/// The pixel value marking the outside of a shape.
pub const OUTSIDE: u8 = 0;

/// A binary inside/outside bitmap in row-major order.
///
/// Every pixel is either [`OUTSIDE`] (0) or [`INSIDE`] (255). This is the
/// source format consumed by [`generate_distance_field`].
///
/// [`generate_distance_field`]: crate::field::generate_distance_field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphaBitmap {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl AlphaBitmap {
    /// Creates a bitmap from raw 0/255 pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`SdfError::DimensionMismatch`] if `data.len()` is not
    /// `width * height`.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, SdfError> {
        if data.len() != width * height {
            return Err(SdfError::DimensionMismatch {
                width,
                height,
                expected: width * height,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Creates a bitmap from a shape function.
    ///
    /// Pixels where `shape(x, y)` returns `true` are inside.
    pub fn from_fn(width: usize, height: usize, shape: impl Fn(usize, usize) -> bool) -> Self {
        let mut data = vec![OUTSIDE; width * height];
        for y in 0..height {
            for x in 0..width {
                if shape(x, y) {
                    data[y * width + x] = INSIDE;
                }
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Thresholds the alpha plane of an RGBA8 pixel buffer.
    ///
    /// Any pixel with nonzero alpha becomes inside.
    ///
    /// # Errors
    ///
    /// Returns [`SdfError::DimensionMismatch`] if `rgba.len()` is not
    /// `width * height * 4`.
    pub fn from_rgba_alpha(width: usize, height: usize, rgba: &[u8]) -> Result<Self, SdfError> {
        if rgba.len() != width * height * 4 {
            return Err(SdfError::DimensionMismatch {
                width,
                height,
                expected: width * height * 4,
                actual: rgba.len(),
            });
        }
        let data = rgba
            .chunks_exact(4)
            .map(|px| if px[3] > 0 { INSIDE } else { OUTSIDE })
            .collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw pixel data, row-major.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the pixel at grid coordinates.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    /// Generates a signed distance field from this bitmap.
    ///
    /// Convenience wrapper around [`generate_distance_field`].
    ///
    /// [`generate_distance_field`]: crate::field::generate_distance_field
    pub fn distance_field(&self, spread: f32, downscale: usize) -> Result<DistanceField, SdfError> {
        crate::field::generate_distance_field(&self.data, self.width, self.height, spread, downscale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_length() {
        assert!(AlphaBitmap::new(4, 4, vec![0; 16]).is_ok());

        let err = AlphaBitmap::new(4, 4, vec![0; 15]).unwrap_err();
        assert!(matches!(
            err,
            SdfError::DimensionMismatch {
                expected: 16,
                actual: 15,
                ..
            }
        ));
    }

    #[test]
    fn test_from_fn() {
        let bitmap = AlphaBitmap::from_fn(4, 4, |x, y| x == y);

        assert_eq!(bitmap.get(0, 0), INSIDE);
        assert_eq!(bitmap.get(3, 3), INSIDE);
        assert_eq!(bitmap.get(1, 0), OUTSIDE);
        assert_eq!(bitmap.get(0, 3), OUTSIDE);
    }

    #[test]
    fn test_from_rgba_alpha_thresholds() {
        // Three pixels: fully opaque, barely visible, transparent.
        let rgba = [
            10, 20, 30, 255, //
            0, 0, 0, 1, //
            200, 200, 200, 0,
        ];
        let bitmap = AlphaBitmap::from_rgba_alpha(3, 1, &rgba).unwrap();

        assert_eq!(bitmap.data(), &[INSIDE, INSIDE, OUTSIDE]);
    }

    #[test]
    fn test_from_rgba_alpha_validates_length() {
        let err = AlphaBitmap::from_rgba_alpha(2, 2, &[0; 12]).unwrap_err();
        assert!(matches!(err, SdfError::DimensionMismatch { .. }));
    }
}
