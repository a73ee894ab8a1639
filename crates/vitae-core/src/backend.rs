use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    OpenError(String),
    #[error("failed to extract text: {0}")]
    ExtractionError(String),
    #[error("external tool not found: {0}")]
    ToolNotFound(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for digital PDF text extraction backends.
///
/// Implementors read a PDF's embedded text objects directly, without
/// rendering pixels. A page with no extractable text contributes an empty
/// string to the output, not an error; errors are reserved for documents
/// the backend cannot open or walk at all. The extraction pipeline in
/// `vitae-ingest` treats any error as empty text, so a failing backend
/// degrades the result rather than aborting the run.
pub trait PdfTextBackend: Send + Sync {
    /// Extract the full text content of a PDF file, pages joined by newlines.
    fn extract_text(&self, path: &Path) -> Result<String, BackendError>;
}

/// Trait for OCR fallback backends.
///
/// Implementors rasterize each page and recognize text from the images.
/// Same degrade-don't-abort contract as [`PdfTextBackend`]: the pipeline
/// maps an error to empty text.
pub trait OcrBackend: Send + Sync {
    /// Recognize the full text content of a PDF file, page outputs concatenated.
    fn extract_text(&self, path: &Path) -> Result<String, BackendError>;
}
