//! Source directory validation and image enumeration.
//!
//! Each input directory becomes one output document, built from its
//! top-level image files. Two checks gate a directory: it must exist, and it
//! must hold at least two supported images — a single image does not need a
//! multi-page container.
//!
//! ## Ordering
//!
//! Images are sorted by their **full file name including extension**,
//! byte-wise and case-insensitive. This deliberately diverges from file
//! explorers, which use natural/numeric sort and parse punctuation
//! specially: there, `file.jpg` may come after `file (1).jpg` because `' '`
//! and `'('` precede `'.'` in ASCII. Zero-padded, `_`-attached numbering
//! (`page_001.jpg`) sorts identically everywhere and is the scheme to use.
//! The sort is pure and deterministic, independent of how the file system
//! enumerates entries.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Image extensions the pipeline accepts, matched case-insensitively.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["bmp", "gif", "jpg", "jpeg", "png", "tif", "tiff"];

/// Minimum supported images a directory must contain to be converted.
pub const MIN_IMAGES: usize = 2;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("not an existing directory: {0}")]
    NotFound(PathBuf),
    #[error("contains fewer than {MIN_IMAGES} supported images: {path} ({found} found)")]
    TooFewImages { path: PathBuf, found: usize },
}

/// True if the path carries a supported image extension.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Pre-flight check: the path is an existing directory holding at least
/// [`MIN_IMAGES`] supported images. Pure check, no side effects.
pub fn validate_directory(path: &Path) -> Result<(), ScanError> {
    if !path.is_dir() {
        return Err(ScanError::NotFound(path.to_path_buf()));
    }
    let found = image_files(path)?.len();
    if found < MIN_IMAGES {
        return Err(ScanError::TooFewImages {
            path: path.to_path_buf(),
            found,
        });
    }
    Ok(())
}

/// List the directory's top-level supported images in page order.
///
/// Not re-validated against [`MIN_IMAGES`]: validation is a batch-level gate
/// that runs once before any conversion starts.
pub fn list_images(path: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut images = image_files(path)?;
    images.sort_by_cached_key(|p| ordering_key(p));
    Ok(images)
}

/// Top-level files with a supported extension, in enumeration order.
fn image_files(path: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        if entry.file_type()?.is_file() && is_supported_image(&entry.path()) {
            files.push(entry.path());
        }
    }
    Ok(files)
}

/// Case-folded bytes of the full file name, the page ordering key.
///
/// Folds the name's raw encoded bytes, not a UTF-8 rendering, so names
/// that are not valid UTF-8 still get distinct, stable keys.
fn ordering_key(path: &Path) -> Vec<u8> {
    path.file_name()
        .map(|name| {
            name.as_encoded_bytes()
                .iter()
                .map(|b| b.to_ascii_lowercase())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).unwrap();
    }

    #[test]
    fn supported_extensions_match_case_insensitively() {
        assert!(is_supported_image(Path::new("a.jpg")));
        assert!(is_supported_image(Path::new("a.JPEG")));
        assert!(is_supported_image(Path::new("a.Tif")));
        assert!(!is_supported_image(Path::new("a.webp")));
        assert!(!is_supported_image(Path::new("a.txt")));
        assert!(!is_supported_image(Path::new("jpg"))); // no extension
    }

    #[test]
    fn validate_rejects_missing_directory() {
        let tmp = tempfile::TempDir::new().unwrap();
        let missing = tmp.path().join("gone");
        let err = validate_directory(&missing).unwrap_err();
        assert!(matches!(err, ScanError::NotFound(_)));
    }

    #[test]
    fn validate_rejects_file_path() {
        let tmp = tempfile::TempDir::new().unwrap();
        touch(tmp.path(), "a.jpg");
        let err = validate_directory(&tmp.path().join("a.jpg")).unwrap_err();
        assert!(matches!(err, ScanError::NotFound(_)));
    }

    #[test]
    fn validate_counts_only_supported_files() {
        let tmp = tempfile::TempDir::new().unwrap();
        touch(tmp.path(), "scan.png");
        touch(tmp.path(), "notes.txt");
        touch(tmp.path(), "thumbs.db");
        touch(tmp.path(), "raw.cr2");

        let err = validate_directory(tmp.path()).unwrap_err();
        assert!(matches!(err, ScanError::TooFewImages { found: 1, .. }), "got {err:?}");
    }

    #[test]
    fn validate_ignores_subdirectories() {
        let tmp = tempfile::TempDir::new().unwrap();
        touch(tmp.path(), "a.jpg");
        std::fs::create_dir(tmp.path().join("nested.png")).unwrap();

        let err = validate_directory(tmp.path()).unwrap_err();
        assert!(matches!(err, ScanError::TooFewImages { found: 1, .. }));
    }

    #[test]
    fn validate_accepts_two_images() {
        let tmp = tempfile::TempDir::new().unwrap();
        touch(tmp.path(), "a.png");
        touch(tmp.path(), "b.jpg");
        validate_directory(tmp.path()).unwrap();
    }

    #[test]
    fn ordering_is_case_insensitive_lexicographic() {
        let tmp = tempfile::TempDir::new().unwrap();
        // Created out of order on purpose; the sort must not depend on
        // enumeration order.
        for name in ["Page_10.jpg", "page_02.jpg", "PAGE_01.jpg", "page_03.jpg"] {
            touch(tmp.path(), name);
        }

        let names: Vec<String> = list_images(tmp.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            ["PAGE_01.jpg", "page_02.jpg", "page_03.jpg", "Page_10.jpg"]
        );
    }

    #[test]
    fn ordering_includes_the_extension() {
        let tmp = tempfile::TempDir::new().unwrap();
        touch(tmp.path(), "page.tif");
        touch(tmp.path(), "page.jpg");

        let names: Vec<String> = list_images(tmp.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["page.jpg", "page.tif"]);
    }

    #[test]
    fn ordering_is_not_natural_sort() {
        let tmp = tempfile::TempDir::new().unwrap();
        touch(tmp.path(), "2.jpg");
        touch(tmp.path(), "10.jpg");

        let names: Vec<String> = list_images(tmp.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        // Lexicographic: "10" sorts before "2"
        assert_eq!(names, ["10.jpg", "2.jpg"]);
    }

    #[cfg(unix)]
    #[test]
    fn ordering_distinguishes_non_utf8_names() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let tmp = tempfile::TempDir::new().unwrap();
        for bytes in [b"scan_\xff.jpg".to_vec(), b"scan_\xfe.jpg".to_vec()] {
            File::create(tmp.path().join(OsString::from_vec(bytes))).unwrap();
        }

        let names: Vec<Vec<u8>> = list_images(tmp.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().as_encoded_bytes().to_vec())
            .collect();
        // Distinct keys, ordered by raw byte value
        assert_eq!(
            names,
            [b"scan_\xfe.jpg".to_vec(), b"scan_\xff.jpg".to_vec()]
        );
    }

    #[test]
    fn list_images_skips_unsupported_entries() {
        let tmp = tempfile::TempDir::new().unwrap();
        touch(tmp.path(), "a.jpg");
        touch(tmp.path(), "b.png");
        touch(tmp.path(), "readme.md");

        assert_eq!(list_images(tmp.path()).unwrap().len(), 2);
    }
}
