use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

use vitae_core::{FallbackPolicy, OcrBackend, PdfTextBackend, normalize};
use vitae_parsing::segment;

// Re-export domain types for convenience
pub use vitae_core::{DEFAULT_MIN_TEXT_LENGTH, SectionContent, SectionKind, SectionMap};

#[derive(Error, Debug)]
pub enum IngestError {
    /// The one surfaced caller-misuse error: everything past the path check
    /// degrades instead of failing.
    #[error("file not found: {0}")]
    FileNotFound(String),
    #[cfg(not(feature = "pdf"))]
    #[error("PDF support not compiled in (enable the `pdf` feature of vitae-ingest)")]
    NoPdfSupport,
}

/// Extract normalized text from a PDF with the default backends and the
/// default fallback threshold.
pub fn extract_text(path: &Path) -> Result<String, IngestError> {
    extract_text_with_threshold(path, DEFAULT_MIN_TEXT_LENGTH)
}

/// Same as [`extract_text`], with a custom minimum-length threshold for the
/// digital stage.
#[cfg(feature = "pdf")]
pub fn extract_text_with_threshold(path: &Path, min_chars: usize) -> Result<String, IngestError> {
    extract_text_with(
        path,
        &vitae_pdf_mupdf::MupdfBackend::new(),
        &vitae_ocr_tesseract::TesseractOcr::new(),
        &vitae_core::MinTextLength::new(min_chars),
    )
}

#[cfg(not(feature = "pdf"))]
pub fn extract_text_with_threshold(_path: &Path, _min_chars: usize) -> Result<String, IngestError> {
    Err(IngestError::NoPdfSupport)
}

/// Run the two-stage extraction pipeline with injected backends and policy.
///
/// The digital backend runs first and the policy is consulted exactly once
/// on its output. When the policy calls for a fallback, the OCR output
/// replaces the digital text unconditionally, even if it turns out shorter.
/// Backend failures degrade to empty text; the empty string is a legitimate
/// (if unhelpful) result, not an error.
pub fn extract_text_with(
    path: &Path,
    pdf: &dyn PdfTextBackend,
    ocr: &dyn OcrBackend,
    policy: &dyn FallbackPolicy,
) -> Result<String, IngestError> {
    if !path.exists() {
        return Err(IngestError::FileNotFound(path.display().to_string()));
    }

    let digital = match pdf.extract_text(path) {
        Ok(text) => text,
        Err(e) => {
            warn!("digital extraction failed: {}", e);
            String::new()
        }
    };

    let selected = if policy.should_fall_back(&digital) {
        debug!(
            digital_chars = digital.trim().chars().count(),
            "digital text below threshold, running OCR fallback"
        );
        match ocr.extract_text(path) {
            Ok(text) => text,
            Err(e) => {
                warn!("OCR fallback failed: {}", e);
                String::new()
            }
        }
    } else {
        debug!("digital text accepted, skipping OCR");
        digital
    };

    Ok(normalize(&selected))
}

/// Extract text and segment it into resume sections in one call, with the
/// default backends and threshold.
pub fn parse_resume(path: &Path) -> Result<SectionMap, IngestError> {
    Ok(segment(&extract_text(path)?))
}

/// [`parse_resume`] with injected backends and policy.
pub fn parse_resume_with(
    path: &Path,
    pdf: &dyn PdfTextBackend,
    ocr: &dyn OcrBackend,
    policy: &dyn FallbackPolicy,
) -> Result<SectionMap, IngestError> {
    Ok(segment(&extract_text_with(path, pdf, ocr, policy)?))
}
