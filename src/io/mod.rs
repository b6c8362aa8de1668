//! Source bitmap acquisition.
//!
//! Converts image containers into the binary alpha bitmaps the generator
//! consumes: PNG decoding in-process, SVG through an external rasterizer.

mod png;
mod svg;

pub use png::{decode_alpha_bitmap, load_alpha_bitmap};
pub use svg::{
    max_distance_for_resolution, SvgRasterizer, MAX_DISTANCES, RASTER_RESOLUTIONS,
};
