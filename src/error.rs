//! Error types for the thumbnail-watermark-removal crate.

use std::path::PathBuf;

/// Errors that can occur while compositing a watermarked image with its thumbnail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An input file could not be decoded as an image.
    #[error("cannot read '{}': {source}", path.display())]
    Decode {
        /// Path of the file that failed to decode.
        path: PathBuf,
        /// The underlying codec error.
        source: image::ImageError,
    },

    /// An input file decoded to a zero-sized image.
    #[error("image '{}' is empty", path.display())]
    EmptyImage {
        /// Path of the offending file.
        path: PathBuf,
    },

    /// The output format is not supported.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// An I/O error occurred while reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error occurred during image encoding.
    #[error("image processing error: {0}")]
    Image(#[from] image::ImageError),
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
