//! File-level orchestration: decode the three inputs, composite, encode the output.

use std::path::{Path, PathBuf};

use image::{DynamicImage, GrayImage, ImageFormat, RgbImage};

use crate::compositor;
use crate::error::{Error, Result};

/// Options controlling compositing behavior.
///
/// The default mark color is 0 (black), matching masks that paint watermarked
/// zones in black.
#[derive(Debug, Clone, Default)]
pub struct ProcessOptions {
    /// Mask value that marks "watermarked, replace this pixel".
    pub mark_color: u8,
}

/// Decode a color input image.
fn load_rgb(path: &Path) -> Result<RgbImage> {
    let img = image::open(path)
        .map_err(|source| Error::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgb8();
    ensure_non_empty(path, img.width(), img.height())?;
    Ok(img)
}

/// Decode the mask, forced to single-channel grayscale regardless of its
/// stored format.
fn load_gray(path: &Path) -> Result<GrayImage> {
    let img = image::open(path)
        .map_err(|source| Error::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .to_luma8();
    ensure_non_empty(path, img.width(), img.height())?;
    Ok(img)
}

fn ensure_non_empty(path: &Path, width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::EmptyImage {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Composite a watermarked file with its clean thumbnail and write the result.
///
/// Loads all three inputs, replaces every pixel the mask marks with
/// `opts.mark_color` by the corresponding (resized) thumbnail pixel, and
/// encodes the result to `output` (format inferred from the extension).
///
/// # Errors
///
/// Returns [`Error::Decode`] or [`Error::EmptyImage`] naming the failing input
/// path, [`Error::UnsupportedFormat`] for an unrecognized output extension, or
/// an I/O/encode error from writing the output. No output file is written
/// unless all three inputs load.
pub fn process_file(
    watermarked: &Path,
    clean_thumbnail: &Path,
    mark_mask: &Path,
    output: &Path,
    opts: &ProcessOptions,
) -> Result<()> {
    let target = load_rgb(watermarked)?;
    let reference = load_rgb(clean_thumbnail)?;
    let mask = load_gray(mark_mask)?;

    let out = compositor::compose(&target, &reference, &mask, opts.mark_color);

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    save_image(&out, output)
}

/// Save an RGB image with format-specific quality settings.
///
/// # Errors
///
/// Returns an error if the format is unsupported or writing fails.
pub fn save_image(img: &RgbImage, path: &Path) -> Result<()> {
    let format =
        ImageFormat::from_path(path).map_err(|e| Error::UnsupportedFormat(e.to_string()))?;

    let dyn_img = DynamicImage::ImageRgb8(img.clone());

    match format {
        ImageFormat::Jpeg => {
            let file = std::fs::File::create(path)?;
            let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(file, 100);
            encoder.encode_image(&dyn_img)?;
        }
        ImageFormat::Png | ImageFormat::WebP | ImageFormat::Bmp => {
            dyn_img.save(path)?;
        }
        _ => {
            return Err(Error::UnsupportedFormat(format!("{format:?}")));
        }
    }

    Ok(())
}

/// Derive a default output path from the watermarked input path.
///
/// If the last `.` falls within the final 5 characters of the path, the
/// extension is stripped before appending `_no_watermark.png`; otherwise the
/// suffix is appended to the full name.
///
/// Example: `"photo.jpg"` becomes `"photo_no_watermark.png"`.
#[must_use]
pub fn default_output_path(input: &Path) -> PathBuf {
    let name = input.to_string_lossy();
    match name.rfind('.') {
        Some(pos) if pos + 5 >= name.len() => {
            PathBuf::from(format!("{}_no_watermark.png", &name[..pos]))
        }
        _ => PathBuf::from(format!("{name}_no_watermark.png")),
    }
}
