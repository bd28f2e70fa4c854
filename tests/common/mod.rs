pub mod fixtures;
pub mod pdf_assertions;

use folio::{ComposeError, Composer, ComposerBuilder, DocumentRecord, ImageSource, InMemoryImageSource};
use lopdf::Document as LopdfDocument;
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Generate a PDF with an empty in-memory image source
pub fn generate_pdf(record: &DocumentRecord) -> Result<GeneratedPdf, ComposeError> {
    generate_pdf_with(
        Composer::builder(),
        Arc::new(InMemoryImageSource::new()),
        record,
    )
}

/// Generate a PDF with a custom builder and image source
pub fn generate_pdf_with(
    builder: ComposerBuilder,
    source: Arc<dyn ImageSource>,
    record: &DocumentRecord,
) -> Result<GeneratedPdf, ComposeError> {
    let composer = builder.with_image_source(source).build()?;
    let bytes = tokio::runtime::Runtime::new()?.block_on(composer.generate(record))?;
    GeneratedPdf::from_bytes(bytes).map_err(|e| ComposeError::Pdf(e.to_string()))
}
