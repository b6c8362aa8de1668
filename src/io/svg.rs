//! SVG rasterization through an external renderer.
//!
//! SVG sources are not rendered in-process. An external resvg-style binary
//! converts them to PNG at a requested square resolution
//! (`<binary> -w <res> -h <res> [extra args] <in.svg> <out.png>`), and the
//! PNG alpha plane is then thresholded like any other bitmap source. When
//! the renderer's output cannot be decoded the resolution is halved and the
//! render retried, down to a floor of 256 pixels.

use std::path::{Path, PathBuf};
use std::process::Command;

use log::warn;

use super::png;
use crate::bitmap::AlphaBitmap;
use crate::error::SdfError;

/// Rasterization resolutions selectable for SVG sources.
pub const RASTER_RESOLUTIONS: [u32; 5] = [256, 512, 1024, 2048, 4096];

/// Maximum usable distance cap for each entry of [`RASTER_RESOLUTIONS`].
pub const MAX_DISTANCES: [u32; 5] = [127, 127, 127, 63, 31];

/// Returns the maximum usable distance cap for a rasterization resolution,
/// or `None` for resolutions outside [`RASTER_RESOLUTIONS`].
pub fn max_distance_for_resolution(resolution: u32) -> Option<u32> {
    RASTER_RESOLUTIONS
        .iter()
        .position(|&r| r == resolution)
        .map(|i| MAX_DISTANCES[i])
}

const MIN_RESOLUTION: u32 = 256;
const DEFAULT_RESOLUTION: u32 = 2048;

/// Invokes an external SVG renderer and thresholds its output.
#[derive(Debug, Clone)]
pub struct SvgRasterizer {
    binary: PathBuf,
    resolution: u32,
    extra_args: Vec<String>,
}

impl SvgRasterizer {
    /// Creates a rasterizer around the given renderer binary, with the
    /// default 2048 pixel resolution.
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            resolution: DEFAULT_RESOLUTION,
            extra_args: Vec::new(),
        }
    }

    /// Sets the requested rasterization resolution.
    pub fn with_resolution(mut self, resolution: u32) -> Self {
        self.resolution = resolution;
        self
    }

    /// Appends custom command line arguments passed to the renderer before
    /// the input and output paths.
    pub fn with_extra_args(mut self, args: impl IntoIterator<Item = String>) -> Self {
        self.extra_args.extend(args);
        self
    }

    /// The currently requested resolution.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Rasterizes an SVG file into a binary alpha bitmap.
    ///
    /// Returns the bitmap together with the resolution actually used, which
    /// is lower than the requested one when the renderer's output could
    /// only be decoded after backing off.
    ///
    /// # Errors
    ///
    /// Fails if the renderer cannot be spawned, exits with a failure
    /// status, or produces output that cannot be decoded at any resolution
    /// down to the 256 pixel floor.
    pub fn rasterize(&self, svg: &Path) -> Result<(AlphaBitmap, u32), SdfError> {
        let mut resolution = self.resolution;
        loop {
            let bytes = self.render(svg, resolution)?;
            match png::decode_alpha_bitmap(&bytes) {
                Ok(bitmap) => {
                    if resolution != self.resolution {
                        warn!(
                            "{} is too big to rasterize at {}, switched to {resolution}",
                            svg.display(),
                            self.resolution,
                        );
                    }
                    return Ok((bitmap, resolution));
                }
                Err(err) => {
                    if resolution <= MIN_RESOLUTION {
                        return Err(err);
                    }
                    resolution /= 2;
                }
            }
        }
    }

    fn render(&self, svg: &Path, resolution: u32) -> Result<Vec<u8>, SdfError> {
        let out = TempPng::new(resolution);
        let output = Command::new(&self.binary)
            .arg("-w")
            .arg(resolution.to_string())
            .arg("-h")
            .arg(resolution.to_string())
            .args(&self.extra_args)
            .arg(svg)
            .arg(&out.path)
            .output()?;

        if !output.status.success() {
            return Err(SdfError::Rasterizer {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(std::fs::read(&out.path)?)
    }
}

/// Temporary PNG output path, removed on drop.
struct TempPng {
    path: PathBuf,
}

impl TempPng {
    fn new(resolution: u32) -> Self {
        let path = std::env::temp_dir().join(format!(
            "imgsdf-{}-{resolution}.png",
            std::process::id()
        ));
        Self { path }
    }
}

impl Drop for TempPng {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
