//! Replace watermarked image regions with pixels from a clean thumbnail.
//!
//! Given a high-resolution watermarked image, a clean low-resolution thumbnail
//! of the same picture, and a mask painting the watermarked zones in a single
//! "mark color" (black by default), this crate resizes the thumbnail (Lanczos)
//! and the mask (nearest-neighbor) to the target's resolution, then copies
//! thumbnail pixels over every marked position.
//!
//! # Quick Start
//!
//! ```no_run
//! use thumbnail_watermark_removal::compose;
//!
//! let watermarked = image::open("photo.jpg").unwrap().to_rgb8();
//! let thumbnail = image::open("thumb.jpg").unwrap().to_rgb8();
//! let mask = image::open("mask.png").unwrap().to_luma8();
//!
//! let restored = compose(&watermarked, &thumbnail, &mask, 0);
//! restored.save("photo_no_watermark.png").unwrap();
//! ```
//!
//! # Working with files
//!
//! [`process_file`] wraps the same operation around file paths: it decodes the
//! three inputs (the mask forced to grayscale), composites, and encodes the
//! result with the format inferred from the output extension.
//!
//! ```no_run
//! use std::path::Path;
//! use thumbnail_watermark_removal::{default_output_path, process_file, ProcessOptions};
//!
//! let input = Path::new("photo.jpg");
//! let output = default_output_path(input); // photo_no_watermark.png
//! process_file(
//!     input,
//!     Path::new("thumb.jpg"),
//!     Path::new("mask.png"),
//!     &output,
//!     &ProcessOptions::default(),
//! )
//! .expect("compositing failed");
//! ```

#![deny(missing_docs)]

pub mod compositor;
mod engine;
pub mod error;

pub use compositor::compose;
pub use engine::{default_output_path, process_file, save_image, ProcessOptions};
pub use error::{Error, Result};
