//! Import pipeline: a source bitmap plus import settings become a
//! packaging-ready distance field.
//!
//! Spread values are defined relative to a reference source resolution and
//! rescaled so their pixel coverage stays constant: a max distance of 32
//! spans 32 pixels on a 1024 pixel source, 64 on 2048, 128 on 4096.

use std::time::Instant;

use log::{debug, warn};

use crate::bitmap::AlphaBitmap;
use crate::error::SdfError;
use crate::field::{generate_distance_field, DistanceField, MAX_SPREAD};

/// Output resolutions selectable for imported sprites.
pub const SPRITE_RESOLUTIONS: [usize; 6] = [64, 128, 256, 512, 1024, 2048];

const SPREAD_REFERENCE_RESOLUTION: f32 = 1024.0;

/// Settings controlling how a source bitmap becomes a distance field
/// sprite.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportSettings {
    /// Longest output dimension, clamped to the [`SPRITE_RESOLUTIONS`]
    /// range.
    pub target_resolution: usize,
    /// Maximum encoded distance, in pixels at the reference resolution.
    pub max_distance: u32,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            target_resolution: 128,
            max_distance: 31,
        }
    }
}

impl ImportSettings {
    /// The spread in source pixels for a source of the given dimensions.
    pub fn normalized_spread(&self, width: usize, height: usize) -> f32 {
        width.max(height) as f32 / (SPREAD_REFERENCE_RESOLUTION / self.max_distance as f32)
    }

    /// The downscale factor mapping the source onto the target resolution.
    ///
    /// Sources already smaller than the target keep their resolution.
    pub fn downscale(&self, width: usize, height: usize) -> usize {
        let target = self
            .target_resolution
            .clamp(SPRITE_RESOLUTIONS[0], SPRITE_RESOLUTIONS[SPRITE_RESOLUTIONS.len() - 1]);
        (width.max(height) / target).max(1)
    }
}

/// Converts a source alpha bitmap into a distance field using the importer
/// semantics: resolution-relative spread, target-resolution downscale, and
/// a warning when the computed spread exceeds the representable maximum.
pub fn import_bitmap(
    bitmap: &AlphaBitmap,
    settings: &ImportSettings,
) -> Result<DistanceField, SdfError> {
    let spread = settings.normalized_spread(bitmap.width(), bitmap.height());
    if spread > MAX_SPREAD {
        warn!("computed max distance {spread:.1} is greater than {MAX_SPREAD}, it will be clamped");
    }
    let downscale = settings.downscale(bitmap.width(), bitmap.height());

    let start = Instant::now();
    let field = generate_distance_field(
        bitmap.data(),
        bitmap.width(),
        bitmap.height(),
        spread,
        downscale,
    )?;
    debug!("distance field convolution took {:?}", start.elapsed());

    Ok(field)
}
