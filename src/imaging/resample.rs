//! Per-image resampling: decode → resize → flatten → JPEG re-encode.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (BMP, GIF, JPEG, PNG, TIFF) | `image` crate (pure Rust decoders) |
//! | Resize | `image::imageops::resize` with `Lanczos3` filter |
//! | Flatten | alpha blend over an opaque white canvas |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` at quality 75 |
//!
//! Every source is decoded to RGBA8 first so palette, grayscale, and alpha
//! variants all go through the same path. The encoder writes pixel data
//! only, so EXIF, ICC profiles, and comments never survive into the output
//! — the generated PDFs are handed to third parties.

use crate::config::ScaleConfig;
use crate::imaging::calculations::{PageSpec, page_spec, scaled_px};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{ImageReader, Rgb, RgbImage, RgbaImage};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// JPEG quality for re-encoded pages, on the encoder's 0-100 scale.
pub const JPEG_QUALITY: u8 = 75;

#[derive(Error, Debug)]
pub enum ResampleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("{path}: divisor {divisor} reduces {width}x{height} to an empty image")]
    EmptyOutput {
        path: PathBuf,
        divisor: f64,
        width: u32,
        height: u32,
    },
    #[error("failed to encode page for {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// One resampled page: encoded raster plus its derived page size.
#[derive(Debug, Clone)]
pub struct ResampledPage {
    pub jpeg: Vec<u8>,
    pub spec: PageSpec,
}

/// Resample a single source image into an opaque JPEG page raster.
///
/// Target dimensions are the source dimensions divided by the run's divisor,
/// rounded to the nearest pixel. A divisor large enough to round either
/// dimension to zero is rejected rather than clamped.
pub fn resample(path: &Path, scale: &ScaleConfig) -> Result<ResampledPage, ResampleError> {
    let decoded = ImageReader::open(path)?
        .decode()
        .map_err(|source| ResampleError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    let target_w = scaled_px(width, scale.divisor);
    let target_h = scaled_px(height, scale.divisor);
    if target_w == 0 || target_h == 0 {
        return Err(ResampleError::EmptyOutput {
            path: path.to_path_buf(),
            divisor: scale.divisor,
            width,
            height,
        });
    }

    // Lanczos3: the same quality-preserving filter used for every resize in
    // this codebase. Exact target dimensions, no aspect correction — the
    // page size is derived from these same pixel counts.
    let resized = image::imageops::resize(&rgba, target_w, target_h, FilterType::Lanczos3);
    let flattened = flatten_onto_white(&resized);

    let mut jpeg = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY);
    flattened
        .write_with_encoder(encoder)
        .map_err(|source| ResampleError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(ResampledPage {
        jpeg,
        spec: page_spec(target_w, target_h, scale),
    })
}

/// Composite an RGBA raster over an opaque white canvas.
///
/// Sources carrying transparency would otherwise render unpredictably
/// against whatever draws the final page; the output raster is guaranteed
/// fully opaque.
fn flatten_onto_white(src: &RgbaImage) -> RgbImage {
    let mut out = RgbImage::new(src.width(), src.height());
    for (x, y, pixel) in src.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        out.put_pixel(x, y, Rgb([over_white(r, a), over_white(g, a), over_white(b, a)]));
    }
    out
}

/// Blend one channel over a white background: `c*a + 255*(1-a)`, rounded.
#[inline]
fn over_white(channel: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((channel as u32 * a + 255 * (255 - a) + 127) / 255) as u8
}
