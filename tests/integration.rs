use std::fs;
use std::path::{Path, PathBuf};

use image::{GrayImage, Luma, Rgb, RgbImage};

use thumbnail_watermark_removal::{process_file, Error, ProcessOptions};

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "thumbnail-watermark-{}-{name}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_fixtures(dir: &Path) -> (PathBuf, PathBuf, PathBuf) {
    let watermarked = dir.join("photo.png");
    RgbImage::from_pixel(4, 4, WHITE).save(&watermarked).unwrap();

    let thumbnail = dir.join("thumb.png");
    RgbImage::from_pixel(2, 2, BLACK).save(&thumbnail).unwrap();

    let mask = dir.join("mask.png");
    GrayImage::from_fn(4, 4, |x, y| {
        if x < 2 && y < 2 {
            Luma([0])
        } else {
            Luma([255])
        }
    })
    .save(&mask)
    .unwrap();

    (watermarked, thumbnail, mask)
}

#[test]
fn process_file_writes_composited_output() {
    let dir = temp_dir("roundtrip");
    let (watermarked, thumbnail, mask) = write_fixtures(&dir);
    let output = dir.join("photo_no_watermark.png");

    process_file(
        &watermarked,
        &thumbnail,
        &mask,
        &output,
        &ProcessOptions::default(),
    )
    .unwrap();

    let out = image::open(&output).unwrap().to_rgb8();
    assert_eq!(out.dimensions(), (4, 4));
    for (x, y, px) in out.enumerate_pixels() {
        if x < 2 && y < 2 {
            assert_eq!(*px, BLACK, "at ({x},{y})");
        } else {
            assert_eq!(*px, WHITE, "at ({x},{y})");
        }
    }

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_input_is_a_decode_error_naming_the_path() {
    let dir = temp_dir("missing");
    let (_, thumbnail, mask) = write_fixtures(&dir);
    let watermarked = dir.join("does-not-exist.png");
    let output = dir.join("out.png");

    let err = process_file(
        &watermarked,
        &thumbnail,
        &mask,
        &output,
        &ProcessOptions::default(),
    )
    .unwrap_err();

    match err {
        Error::Decode { path, .. } => assert_eq!(path, watermarked),
        other => panic!("expected Decode error, got {other:?}"),
    }
    assert!(!output.exists(), "no output file on failure");

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn corrupt_mask_is_a_decode_error() {
    let dir = temp_dir("corrupt");
    let (watermarked, thumbnail, _) = write_fixtures(&dir);
    let mask = dir.join("broken.png");
    fs::write(&mask, b"not a png").unwrap();
    let output = dir.join("out.png");

    let err = process_file(
        &watermarked,
        &thumbnail,
        &mask,
        &output,
        &ProcessOptions::default(),
    )
    .unwrap_err();

    match err {
        Error::Decode { path, .. } => assert_eq!(path, mask),
        other => panic!("expected Decode error, got {other:?}"),
    }
    assert!(!output.exists());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn creates_missing_output_directory() {
    let dir = temp_dir("nested");
    let (watermarked, thumbnail, mask) = write_fixtures(&dir);
    let output = dir.join("nested").join("deeper").join("out.png");

    process_file(
        &watermarked,
        &thumbnail,
        &mask,
        &output,
        &ProcessOptions::default(),
    )
    .unwrap();

    assert!(output.exists());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn custom_mark_color_replaces_complement_region() {
    let dir = temp_dir("markcolor");
    let (watermarked, thumbnail, mask) = write_fixtures(&dir);
    let output = dir.join("out.png");

    // With mark color 255, the white part of the mask selects replacement.
    let opts = ProcessOptions { mark_color: 255 };
    process_file(&watermarked, &thumbnail, &mask, &output, &opts).unwrap();

    let out = image::open(&output).unwrap().to_rgb8();
    for (x, y, px) in out.enumerate_pixels() {
        if x < 2 && y < 2 {
            assert_eq!(*px, WHITE, "at ({x},{y})");
        } else {
            assert_eq!(*px, BLACK, "at ({x},{y})");
        }
    }

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn output_format_follows_extension() {
    let dir = temp_dir("bmp");
    let (watermarked, thumbnail, mask) = write_fixtures(&dir);
    let output = dir.join("out.bmp");

    process_file(
        &watermarked,
        &thumbnail,
        &mask,
        &output,
        &ProcessOptions::default(),
    )
    .unwrap();

    let out = image::open(&output).unwrap().to_rgb8();
    assert_eq!(out.dimensions(), (4, 4));

    fs::remove_dir_all(&dir).ok();
}
