//! Unit tests for texture.rs
//!
//! Tests image decoding, vertical flip, channel expansion and sampler defaults.

use crate::error::Error;
use crate::graphics_device::{Filter, PixelFormat, SamplerDesc, TextureImage, WrapMode};
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("hellogl_texture_tests_{}_{}", std::process::id(), name))
}

/// 1x2 image: top row red, bottom row blue
fn write_two_row_png(name: &str, with_alpha: bool) -> PathBuf {
    let path = temp_path(name);
    if with_alpha {
        let mut img = image::RgbaImage::new(1, 2);
        img.put_pixel(0, 0, image::Rgba([255, 0, 0, 128]));
        img.put_pixel(0, 1, image::Rgba([0, 0, 255, 255]));
        img.save(&path).unwrap();
    } else {
        let mut img = image::RgbImage::new(1, 2);
        img.put_pixel(0, 0, image::Rgb([255, 0, 0]));
        img.put_pixel(0, 1, image::Rgb([0, 0, 255]));
        img.save(&path).unwrap();
    }
    path
}

// ============================================================================
// DECODING
// ============================================================================

#[test]
fn test_load_rgb_png_without_flip() {
    let path = write_two_row_png("rgb.png", false);
    let image = TextureImage::load(&path, false).unwrap();
    assert_eq!((image.width, image.height), (1, 2));
    assert_eq!(image.channel_count, 3);
    assert_eq!(image.format, PixelFormat::Rgb8);
    assert_eq!(image.pixels, vec![255, 0, 0, 0, 0, 255]);
    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_with_vertical_flip_puts_bottom_row_first() {
    let path = write_two_row_png("flip.png", false);
    let image = TextureImage::load(&path, true).unwrap();
    assert_eq!(image.pixels, vec![0, 0, 255, 255, 0, 0]);
    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_rgba_keeps_alpha() {
    let path = write_two_row_png("rgba.png", true);
    let image = TextureImage::load(&path, false).unwrap();
    assert_eq!(image.channel_count, 4);
    assert_eq!(image.format, PixelFormat::Rgba8);
    assert_eq!(image.pixels.len(), 8);
    assert_eq!(image.pixels[3], 128);
    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_missing_file_is_resource_load_error() {
    let path = temp_path("does_not_exist.png");
    match TextureImage::load(&path, true) {
        Err(Error::ResourceLoadError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected ResourceLoadError, got {:?}", other),
    }
}

#[test]
fn test_load_garbage_file_is_resource_load_error() {
    let path = temp_path("garbage.png");
    std::fs::write(&path, b"not an image").unwrap();
    assert!(matches!(TextureImage::load(&path, false), Err(Error::ResourceLoadError { .. })));
    std::fs::remove_file(path).ok();
}

// ============================================================================
// RAW PIXELS
// ============================================================================

#[test]
fn test_from_pixels_checks_length() {
    assert!(TextureImage::from_pixels(2, 2, PixelFormat::Rgb8, vec![0; 12]).is_ok());
    assert!(TextureImage::from_pixels(2, 2, PixelFormat::Rgba8, vec![0; 12]).is_err());
}

#[test]
fn test_pixel_format_channels() {
    assert_eq!(PixelFormat::Rgb8.channel_count(), 3);
    assert_eq!(PixelFormat::Rgba8.channel_count(), 4);
}

#[test]
fn test_sampler_defaults() {
    let sampler = SamplerDesc::default();
    assert_eq!(sampler.wrap, WrapMode::Repeat);
    assert_eq!(sampler.min_filter, Filter::Linear);
    assert_eq!(sampler.mag_filter, Filter::Linear);
    assert!(sampler.mipmaps);
}
