//! The encoded distance field grid and its query helpers.

use num_traits::Float;

/// A signed distance field produced from a binary alpha bitmap.
///
/// Stores one byte per output pixel, row-major. 128 encodes the
/// inside/outside boundary; inside pixels rise toward 255 and outside
/// pixels fall toward 0, saturating at the spread distance.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceField {
    width: usize,
    height: usize,
    spread: f32,
    data: Vec<u8>,
}

impl DistanceField {
    pub(crate) fn from_parts(width: usize, height: usize, spread: f32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            width,
            height,
            spread,
            data,
        }
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

    /// The effective spread the field was generated with, after clamping.
    #[inline]
    pub fn spread(&self) -> f32 {
        self.spread
    }

    /// Encoded distance bytes, row-major.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the field and returns the encoded bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Returns the encoded byte at grid coordinates.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    /// Decodes the cell at grid coordinates back to a signed distance in
    /// source pixels. Positive inside, negative outside.
    pub fn distance_at<F: Float>(&self, x: usize, y: usize) -> F {
        decode(self.get(x, y), F::from(self.spread).unwrap())
    }

    /// Samples the decoded field at fractional grid coordinates using
    /// bilinear interpolation. Coordinates are clamped to the grid.
    pub fn sample<F: Float>(&self, x: F, y: F) -> F {
        let x0 = x.floor().to_usize().unwrap_or(0).min(self.width - 1);
        let y0 = y.floor().to_usize().unwrap_or(0).min(self.height - 1);
        let x1 = (x0 + 1).min(self.width - 1);
        let y1 = (y0 + 1).min(self.height - 1);

        // Interpolation weights
        let fx = (x - F::from(x0).unwrap()).max(F::zero()).min(F::one());
        let fy = (y - F::from(y0).unwrap()).max(F::zero()).min(F::one());

        let v00: F = self.distance_at(x0, y0);
        let v10: F = self.distance_at(x1, y0);
        let v01: F = self.distance_at(x0, y1);
        let v11: F = self.distance_at(x1, y1);

        let one = F::one();
        let v0 = v00 * (one - fx) + v10 * fx;
        let v1 = v01 * (one - fx) + v11 * fx;
        v0 * (one - fy) + v1 * fy
    }

    /// Expands the field into an RGBA8 buffer: white pixels carrying the
    /// distance byte in the alpha channel, the layout texture packagers
    /// consume.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.data.len() * 4);
        for &v in &self.data {
            rgba.extend_from_slice(&[255, 255, 255, v]);
        }
        rgba
    }
}

/// Decodes an encoded distance byte back to a signed distance in source
/// pixels, given the spread the field was generated with.
pub fn decode<F: Float>(value: u8, spread: F) -> F {
    let half = F::from(0.5).unwrap();
    let norm = F::from(value).unwrap() / F::from(255.0).unwrap();
    (norm - half) * (spread + spread)
}
