//! # img2pdf
//!
//! Batch-convert directories of scanned page images into multi-page PDFs.
//! Each input directory becomes one `.pdf` next to it, one page per image,
//! with every page sized to the scan's physical dimensions at the chosen
//! output resolution.
//!
//! # Pipeline
//!
//! ```text
//! validate  every input directory     (all-or-nothing pre-flight gate)
//! convert   per directory, in order:
//!           enumerate + sort images → resample each → append page → finalize
//! ```
//!
//! Scale settings are computed once per run: scans made at `source_dpi` and
//! divided by `divisor` yield pages at `source_dpi / divisor` DPI, so a
//! 300 DPI scan divided by 2 prints at its original physical size from half
//! the pixels.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | validated per-run scale settings (`ScaleConfig`) |
//! | [`scan`] | directory validation, image enumeration and ordering |
//! | [`imaging`] | pixel/point math and per-image resampling |
//! | [`assemble`] | forward-only PDF writer (one document per directory) |
//! | [`batch`] | orchestration: pre-flight gate, conversion loop, progress events |
//! | [`output`] | CLI output formatting for batch events and summaries |
//!
//! # Design Decisions
//!
//! ## Lexicographic Ordering, Not Natural Sort
//!
//! Pages are ordered by full file name (extension included), byte-wise and
//! case-insensitive. File explorers natural-sort instead, so `page2.jpg`
//! there precedes `page10.jpg`; here it does not. The trade is
//! determinism: the same directory always produces the same page order on
//! every platform and file system. Zero-padded names sort identically
//! under both schemes and are the convention to use.
//!
//! ## JPEG at Quality 75, Metadata Stripped
//!
//! Every page raster is re-encoded as JPEG at quality 75 regardless of
//! source format. Scanned pages are distributed to third parties, so
//! EXIF/ICC/comment metadata is deliberately never carried over — the
//! encoder writes pixel data only — and the fixed quality keeps output
//! size predictable across mixed-format inputs.
//!
//! ## Low-Level PDF Construction
//!
//! Documents are built directly with [lopdf](https://docs.rs/lopdf) rather
//! than a layout library: each page is a media box plus one `DCTDecode`
//! image XObject, so the re-encoded JPEG bytes land in the file untouched
//! and nothing is ever decoded twice. `Document::compress` then compresses
//! content streams and the document structure on save.
//!
//! ## Failure Isolation
//!
//! Validation is all-or-nothing *before* the run: a missing directory or
//! one with fewer than two images aborts the batch with zero files
//! written. During the run the boundary flips to per-directory: resizing
//! and encoding are slow, so one corrupt scan abandons only its own
//! document (the partial file stays on disk) and the batch moves on.

pub mod assemble;
pub mod batch;
pub mod config;
pub mod imaging;
pub mod output;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
