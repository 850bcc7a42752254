//! Shared test utilities for the img2pdf test suite.
//!
//! Synthetic images are generated with the `image` crate so tests never
//! depend on fixture files.

use image::{ImageEncoder, Rgb, RgbImage, Rgba, RgbaImage};
use std::path::Path;

/// Encode a gradient RGB raster as JPEG bytes.
pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let mut bytes = Vec::new();
    image::codecs::jpeg::JpegEncoder::new(&mut bytes)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
    bytes
}

/// Write a small valid JPEG file with the given dimensions.
pub fn write_test_jpeg(path: &Path, width: u32, height: u32) {
    std::fs::write(path, jpeg_bytes(width, height)).unwrap();
}

/// Write an RGBA PNG filled with one pixel value (alpha included).
pub fn write_test_png_rgba(path: &Path, width: u32, height: u32, pixel: [u8; 4]) {
    let img = RgbaImage::from_pixel(width, height, Rgba(pixel));
    img.save(path).unwrap();
}
