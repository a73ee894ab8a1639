use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

use vitae_core::{BackendError, OcrBackend};

/// Tesseract-based implementation of [`OcrBackend`].
///
/// Rasterizes every page with `pdftoppm` (Poppler) into a temporary
/// directory, then recognizes each page image with the `tesseract` binary
/// and concatenates the outputs. The raster directory is owned by a single
/// invocation and removed when its guard drops, on every exit path:
/// success, partial page failure, or an early error return.
pub struct TesseractOcr {
    /// Tesseract language setting.
    language: String,
}

impl TesseractOcr {
    pub fn new() -> Self {
        Self {
            language: "eng".to_string(),
        }
    }

    /// Set the Tesseract language.
    pub fn with_language(mut self, lang: &str) -> Self {
        self.language = lang.to_string();
        self
    }

    /// Convert every page of the PDF to a PNG in `out_dir` and return the
    /// image paths in page order. Runs pdftoppm at its default resolution.
    fn rasterize(&self, pdf_path: &Path, out_dir: &Path) -> Result<Vec<PathBuf>, BackendError> {
        let status = Command::new("pdftoppm")
            .arg("-png")
            .arg(pdf_path)
            .arg(out_dir.join("page"))
            .status();

        match status {
            Ok(s) if s.success() => {}
            Ok(_) => {
                return Err(BackendError::ExtractionError(
                    "pdftoppm failed to convert PDF".to_string(),
                ));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(BackendError::ToolNotFound(
                    "pdftoppm (install poppler-utils)".to_string(),
                ));
            }
            Err(e) => return Err(BackendError::Io(e)),
        }

        // pdftoppm names files page-1.png, page-2.png, ... zero-padded to a
        // width that keeps the lexicographic order equal to the page order
        let mut images: Vec<PathBuf> = std::fs::read_dir(out_dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "png"))
            .collect();
        images.sort();

        if images.is_empty() {
            return Err(BackendError::ExtractionError(
                "no page images generated from PDF".to_string(),
            ));
        }
        Ok(images)
    }

    /// Run Tesseract on one page image.
    fn recognize(&self, image_path: &Path) -> Result<String, BackendError> {
        let output = Command::new("tesseract")
            .arg(image_path)
            .arg("stdout")
            .args(["-l", &self.language])
            .output();

        match output {
            Ok(output) if output.status.success() => {
                Ok(String::from_utf8_lossy(&output.stdout).to_string())
            }
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                Err(BackendError::ExtractionError(format!(
                    "tesseract failed: {}",
                    stderr
                )))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(BackendError::ToolNotFound(
                "tesseract (install tesseract-ocr)".to_string(),
            )),
            Err(e) => Err(BackendError::Io(e)),
        }
    }

    /// Rasterize into `raster_dir` and recognize page by page. A page whose
    /// recognition fails is logged and skipped; rasterization failure for
    /// the whole document is an error.
    fn ocr_into(&self, pdf_path: &Path, raster_dir: &Path) -> Result<String, BackendError> {
        let images = self.rasterize(pdf_path, raster_dir)?;

        let mut text = String::new();
        for (i, image_path) in images.iter().enumerate() {
            match self.recognize(image_path) {
                Ok(page_text) => text.push_str(&page_text),
                Err(e) => {
                    tracing::warn!("OCR failed for page {}: {}", i + 1, e);
                }
            }
        }
        Ok(text)
    }
}

impl Default for TesseractOcr {
    fn default() -> Self {
        Self::new()
    }
}

impl OcrBackend for TesseractOcr {
    fn extract_text(&self, path: &Path) -> Result<String, BackendError> {
        let raster_dir = TempDir::new()?;
        // The guard drops here on both the Ok and the Err path, deleting
        // every rasterized page
        self.ocr_into(path, raster_dir.path())
    }
}
