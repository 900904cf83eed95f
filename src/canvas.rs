use crate::document::Document;
use crate::element::{Bitmap, Element};
use crate::error::{ExportError, SceneError};
use crate::fill::flood_fill;
use crate::history::{Scene, Snapshot};
use crate::pixel::{PixelBuffer, Rgba};
use crate::raster;

/// The drawing surface: the document plus its rendered pixels.
///
/// `pixels` always matches `document`; every mutation updates both.
#[derive(Debug)]
pub struct Canvas {
    document: Document,
    pixels: PixelBuffer,
    /// Bumped whenever `pixels` change, so the UI knows when to re-upload
    version: u64,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self::from_document(Document::new(width, height))
    }

    pub fn from_document(document: Document) -> Self {
        let pixels = raster::render(&document);
        Self {
            document,
            pixels,
            version: 0,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn width(&self) -> usize {
        self.document.width()
    }

    pub fn height(&self) -> usize {
        self.document.height()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Paint a finished stroke or shape on top of the canvas
    pub fn add_element(&mut self, element: impl Into<Element>) {
        let element = element.into();
        raster::draw(&mut self.pixels, &element);
        self.document.add_element(element);
        self.version += 1;
    }

    /// Bucket fill at `(x, y)`.
    ///
    /// The filled pixels replace every element with a single bitmap, the way a
    /// raster paint program flattens on fill. Returns `false` if the fill
    /// changed nothing.
    pub fn fill(&mut self, x: i64, y: i64, color: Rgba) -> bool {
        let mut filled = self.pixels.clone();
        if flood_fill(&mut filled, x, y, color) == 0 {
            return false;
        }
        self.document.replace_all(Bitmap::new(filled.clone()));
        self.pixels = filled;
        self.version += 1;
        true
    }

    /// Remove everything. Returns `false` if the canvas was already empty.
    pub fn clear(&mut self) -> bool {
        if self.document.is_empty() {
            return false;
        }
        self.document.clear();
        self.pixels = raster::render(&self.document);
        self.version += 1;
        true
    }

    /// Encode the rendered canvas as PNG
    pub fn export_png(&self) -> Result<Vec<u8>, ExportError> {
        if self.pixels.width() == 0 || self.pixels.height() == 0 {
            return Err(ExportError::Empty);
        }
        Ok(self.pixels.to_png()?)
    }

    fn replace_document(&mut self, document: Document) {
        self.pixels = raster::render(&document);
        self.document = document;
        self.version += 1;
    }
}

impl Scene for Canvas {
    fn snapshot(&self) -> Result<Snapshot, SceneError> {
        self.document.to_json().map(Snapshot::new)
    }

    async fn restore(&mut self, snapshot: &Snapshot) -> Result<(), SceneError> {
        let document = Document::from_json(snapshot.as_str())?;
        self.replace_document(document);
        Ok(())
    }
}
