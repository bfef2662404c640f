use std::path::Path;

use crate::error::{Result, ResumeError};
use crate::ingest::text::{split_pages, PageSource};

/// Page-based PDF text extractor.
pub struct PdfSource;

impl Default for PdfSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfSource {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Extract page texts from in-memory PDF bytes.
    pub fn pages_from_mem(&self, bytes: &[u8], origin: &str) -> Result<Vec<String>> {
        let text = pdf_extract::extract_text_from_mem(bytes).map_err(|e| ResumeError::Pdf {
            path: origin.to_string(),
            detail: format!("PDF extraction error: {e}"),
        })?;
        Ok(split_pages(&text))
    }
}

impl PageSource for PdfSource {
    fn pages(&self, path: &Path) -> Result<Vec<String>> {
        let bytes = std::fs::read(path)?;
        let pages = self.pages_from_mem(&bytes, &path.to_string_lossy())?;
        tracing::debug!(path = %path.display(), pages = pages.len(), "extracted pdf text");
        Ok(pages)
    }
}
