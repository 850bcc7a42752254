//! Pure calculation functions for page dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

use crate::config::ScaleConfig;

/// Points per inch in PDF page geometry.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Derived size of one output page.
///
/// Pixel dimensions come from dividing the source raster by the run's
/// divisor; point dimensions relate those pixels to physical size at the
/// run's output resolution. Because both are derived from the same resized
/// pixel counts, the page and the raster always share an aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSpec {
    pub width_px: u32,
    pub height_px: u32,
    pub width_pts: f64,
    pub height_pts: f64,
}

/// Scale one pixel dimension by the divisor, rounding half away from zero.
///
/// A large enough divisor rounds small dimensions to 0; callers must treat
/// that as an error, never feed a zero dimension further down the pipeline.
pub fn scaled_px(original: u32, divisor: f64) -> u32 {
    (original as f64 / divisor).round() as u32
}

/// Build the page spec for an already-resized raster.
pub fn page_spec(width_px: u32, height_px: u32, scale: &ScaleConfig) -> PageSpec {
    PageSpec {
        width_px,
        height_px,
        width_pts: width_px as f64 * POINTS_PER_INCH / scale.output_dpi,
        height_pts: height_px as f64 * POINTS_PER_INCH / scale.output_dpi,
    }
}
