//! Mask-driven compositing of a watermarked image with a clean thumbnail.
//!
//! The watermark is never detected or modeled: a caller-supplied mask marks the
//! damaged pixels, and a clean (typically lower-resolution) thumbnail supplies
//! their replacements.

use image::imageops::{self, FilterType};
use image::{GrayImage, RgbImage};

/// Composite a watermarked image with a clean reference, guided by a mask.
///
/// The reference is resized to the target's dimensions with Lanczos resampling
/// (the thumbnail is usually much smaller; smooth upscaling avoids blocky
/// artifacts). The mask is resized with nearest-neighbor so its categorical
/// values survive exactly. Every pixel whose mask value equals `mark_color` is
/// then replaced with the corresponding reference pixel; all others keep the
/// target's value.
///
/// The output always has the target's exact dimensions and channel layout.
/// Mask values that do not compare equal to `mark_color` (including
/// anti-aliased edge values) leave the target pixel untouched; there is no
/// blending at mask boundaries.
#[must_use]
pub fn compose(
    target: &RgbImage,
    clean_reference: &RgbImage,
    mask: &GrayImage,
    mark_color: u8,
) -> RgbImage {
    let (width, height) = target.dimensions();

    let clean = if clean_reference.dimensions() == (width, height) {
        clean_reference.clone()
    } else {
        imageops::resize(clean_reference, width, height, FilterType::Lanczos3)
    };

    // Nearest-neighbor only: a smoothing filter would invent intermediate
    // mask values that no longer compare equal to `mark_color`.
    let mask = if mask.dimensions() == (width, height) {
        mask.clone()
    } else {
        imageops::resize(mask, width, height, FilterType::Nearest)
    };

    let mut out = target.clone();
    for (x, y, px) in out.enumerate_pixels_mut() {
        if mask.get_pixel(x, y)[0] == mark_color {
            *px = *clean.get_pixel(x, y);
        }
    }
    out
}
