//! Image operations for page conversion — pure Rust, statically linked.
//!
//! [`calculations`] holds the pixel/point math; [`resample`] does the
//! decode → resize → flatten → re-encode work for one page.

pub mod calculations;
pub mod resample;

pub use calculations::{POINTS_PER_INCH, PageSpec, page_spec, scaled_px};
pub use resample::{JPEG_QUALITY, ResampleError, ResampledPage, resample};
