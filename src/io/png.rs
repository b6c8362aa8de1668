//! PNG decoding into binary alpha bitmaps.

use std::path::Path;

use crate::bitmap::AlphaBitmap;
use crate::error::SdfError;

/// Decodes an in-memory image into a binary alpha bitmap.
///
/// The image is expanded to RGBA and its alpha plane thresholded: any
/// pixel with nonzero alpha is inside.
pub fn decode_alpha_bitmap(bytes: &[u8]) -> Result<AlphaBitmap, SdfError> {
    let image = image::load_from_memory(bytes)?.into_rgba8();
    let (width, height) = image.dimensions();
    AlphaBitmap::from_rgba_alpha(width as usize, height as usize, image.as_raw())
}

/// Reads and decodes an image file into a binary alpha bitmap.
pub fn load_alpha_bitmap(path: impl AsRef<Path>) -> Result<AlphaBitmap, SdfError> {
    let bytes = std::fs::read(path)?;
    decode_alpha_bitmap(&bytes)
}
