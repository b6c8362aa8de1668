//! Error types for distance field generation and import.

use thiserror::Error;

/// Errors that can occur while generating or importing a distance field.
#[derive(Debug, Error)]
pub enum SdfError {
    /// Source buffer length does not match the stated dimensions.
    #[error("source length {actual} does not match {width}x{height} ({expected} bytes expected)")]
    DimensionMismatch {
        /// Stated width in pixels.
        width: usize,
        /// Stated height in pixels.
        height: usize,
        /// Expected buffer length.
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },

    /// Downscale factor of zero.
    #[error("downscale factor must be at least 1")]
    InvalidDownscale,

    /// Downscaling would truncate the output to zero pixels.
    #[error("{width}x{height} source downscaled by {downscale} produces an empty output")]
    EmptyOutput {
        /// Source width in pixels.
        width: usize,
        /// Source height in pixels.
        height: usize,
        /// Requested downscale factor.
        downscale: usize,
    },

    /// The external rasterizer exited with a failure status.
    #[error("rasterizer {status}: {stderr}")]
    Rasterizer {
        /// Exit status of the rasterizer process.
        status: std::process::ExitStatus,
        /// Captured standard error output.
        stderr: String,
    },

    /// The source image could not be decoded.
    #[error("failed to decode source image")]
    Decode(#[from] image::ImageError),

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
