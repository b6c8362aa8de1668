//! imgsdf - signed distance fields from alpha bitmaps
//!
//! Converts binary inside/outside bitmaps into downsampled grayscale
//! distance maps, used to render crisp, scalable vector-like edges from
//! rasterized sprites. The core is a separable approximate Euclidean
//! distance transform that downscales as it goes; around it sit thin
//! collaborators for acquiring bitmaps (PNG decoding, external SVG
//! rasterization) and for mapping importer-style settings onto the
//! generator.
//!
//! # Example
//!
//! ```
//! use imgsdf::AlphaBitmap;
//!
//! // A filled disc, rasterized procedurally.
//! let bitmap = AlphaBitmap::from_fn(64, 64, |x, y| {
//!     let dx = x as i32 - 32;
//!     let dy = y as i32 - 32;
//!     dx * dx + dy * dy < 20 * 20
//! });
//!
//! let field = bitmap.distance_field(8.0, 2).unwrap();
//! assert_eq!((field.width(), field.height()), (32, 32));
//! assert!(field.get(16, 16) > 128); // inside the disc
//! assert!(field.get(0, 0) < 128); // outside
//! ```

pub mod bitmap;
pub mod error;
pub mod field;
pub mod import;
pub mod io;
mod math;

pub use bitmap::AlphaBitmap;
pub use error::SdfError;
pub use field::{decode, generate_distance_field, DistanceField, MAX_SPREAD};
pub use import::{import_bitmap, ImportSettings};
