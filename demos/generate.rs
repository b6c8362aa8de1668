//! Generates a distance field from a procedural shape and writes both the
//! source bitmap and the field as PNG files.
//!
//! Run with: cargo run --example generate
//!
//! Pass a PNG path to use it as the source instead:
//! cargo run --example generate -- sprite.png

use imgsdf::io::load_alpha_bitmap;
use imgsdf::{import_bitmap, AlphaBitmap, ImportSettings, SdfError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let bitmap = match std::env::args().nth(1) {
        Some(path) => load_alpha_bitmap(&path)?,
        None => sample_shape(512),
    };

    let settings = ImportSettings {
        target_resolution: 128,
        max_distance: 31,
    };
    let field = import_bitmap(&bitmap, &settings)?;

    save_gray(
        "source.png",
        bitmap.width(),
        bitmap.height(),
        bitmap.data().to_vec(),
    )?;
    save_gray(
        "distance_field.png",
        field.width(),
        field.height(),
        field.bytes().to_vec(),
    )?;

    println!(
        "Wrote source.png ({}x{}) and distance_field.png ({}x{}, spread {})",
        bitmap.width(),
        bitmap.height(),
        field.width(),
        field.height(),
        field.spread(),
    );

    Ok(())
}

/// A ring with a bite taken out of it, to exercise concave boundaries.
fn sample_shape(size: usize) -> AlphaBitmap {
    let center = size as f32 / 2.0;
    AlphaBitmap::from_fn(size, size, |x, y| {
        let dx = x as f32 - center;
        let dy = y as f32 - center;
        let r = (dx * dx + dy * dy).sqrt();

        let in_ring = r < size as f32 * 0.4 && r > size as f32 * 0.18;
        let in_bite = dx > 0.0 && dy.abs() < size as f32 * 0.08;
        in_ring && !in_bite
    })
}

fn save_gray(path: &str, width: usize, height: usize, data: Vec<u8>) -> Result<(), SdfError> {
    let image = image::GrayImage::from_raw(width as u32, height as u32, data)
        .ok_or_else(|| std::io::Error::other("pixel buffer does not match dimensions"))?;
    image.save(path).map_err(SdfError::from)
}
