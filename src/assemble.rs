//! Forward-only PDF document assembly over `lopdf`.
//!
//! [`DocumentWriter`] builds one output document per source directory. Pages
//! are appended strictly in order; each page's media box is fixed when the
//! page is created, sized so the resampled raster fills it exactly from the
//! bottom-left origin. Page rasters are held only as their already-encoded
//! JPEG bytes — a `DCTDecode` image XObject per page — so memory stays
//! proportional to the compressed output, never to decoded pixels.
//!
//! The output file is created (truncated) up front, so permission and path
//! problems surface before any decoding work is spent, and the handle is
//! released when the writer is dropped on both success and failure paths.
//! [`DocumentWriter::finalize`] compresses content streams and the document
//! structure (`Document::compress`) before writing.

use crate::imaging::PageSpec;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssembleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF structure error: {0}")]
    Pdf(#[from] lopdf::Error),
}

/// Streaming writer for one multi-page output document.
#[derive(Debug)]
pub struct DocumentWriter {
    doc: Document,
    page_ids: Vec<ObjectId>,
    file: File,
    path: PathBuf,
}

impl DocumentWriter {
    /// Create or truncate the output file and start an empty document.
    pub fn create(path: &Path) -> Result<Self, AssembleError> {
        let file = File::create(path)?;
        Ok(Self {
            doc: Document::with_version("1.5"),
            page_ids: Vec::new(),
            file,
            path: path.to_path_buf(),
        })
    }

    /// Output file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Pages appended so far.
    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Append one page sized to `spec`, filled edge to edge by the raster.
    ///
    /// The JPEG bytes are embedded as-is in a `DCTDecode` image XObject;
    /// the content stream scales the image to the full page width and height
    /// at the bottom-left origin. Purely in-memory — write failures surface
    /// in [`finalize`](Self::finalize).
    pub fn add_page(&mut self, jpeg: Vec<u8>, spec: &PageSpec) {
        let image_name = format!("Im{}", self.page_ids.len());

        // Already DCT-compressed; recompressing the stream would only grow it.
        let xobject = Stream::new(
            dictionary! {
                "Type" => Object::Name(b"XObject".to_vec()),
                "Subtype" => Object::Name(b"Image".to_vec()),
                "Width" => spec.width_px as i64,
                "Height" => spec.height_px as i64,
                "ColorSpace" => Object::Name(b"DeviceRGB".to_vec()),
                "BitsPerComponent" => Object::Integer(8),
                "Filter" => Object::Name(b"DCTDecode".to_vec()),
            },
            jpeg,
        )
        .with_compression(false);
        let xobject_id = self.doc.add_object(xobject);

        let content = format!(
            "q\n{w} 0 0 {h} 0 0 cm\n/{image_name} Do\nQ",
            w = spec.width_pts,
            h = spec.height_pts,
        );
        let content_id = self
            .doc
            .add_object(Stream::new(dictionary! {}, content.into_bytes()));

        let mut xobjects = Dictionary::new();
        xobjects.set(image_name.into_bytes(), Object::Reference(xobject_id));

        let page_id = self.doc.add_object(dictionary! {
            "Type" => Object::Name(b"Page".to_vec()),
            "MediaBox" => Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(spec.width_pts as f32),
                Object::Real(spec.height_pts as f32),
            ]),
            "Resources" => Object::Dictionary(dictionary! {
                "XObject" => Object::Dictionary(xobjects),
            }),
            "Contents" => Object::Reference(content_id),
        });
        self.page_ids.push(page_id);
    }

    /// Build the page tree and catalog, compress, and write the file.
    ///
    /// Consumes the writer; the file handle is released on return whether or
    /// not the write succeeded.
    pub fn finalize(mut self) -> Result<PathBuf, AssembleError> {
        let kids: Vec<Object> = self
            .page_ids
            .iter()
            .map(|id| Object::Reference(*id))
            .collect();
        let pages_id = self.doc.add_object(dictionary! {
            "Type" => Object::Name(b"Pages".to_vec()),
            "Kids" => Object::Array(kids),
            "Count" => self.page_ids.len() as i64,
        });

        for page_id in &self.page_ids {
            self.doc
                .get_object_mut(*page_id)?
                .as_dict_mut()?
                .set("Parent", Object::Reference(pages_id));
        }

        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => Object::Name(b"Catalog".to_vec()),
            "Pages" => Object::Reference(pages_id),
        });
        self.doc.trailer.set("Root", Object::Reference(catalog_id));

        self.doc.compress();
        self.doc.save_to(&mut self.file)?;
        self.file.flush()?;
        Ok(self.path)
    }
}
