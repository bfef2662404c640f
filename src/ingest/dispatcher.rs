use std::collections::HashMap;
use std::path::Path;

use crate::error::{Result, ResumeError};
use crate::ingest::text::{pdf::PdfSource, plaintext::PlaintextSource, PageSource};

/// Routes an input file to the page source for its extension.
pub struct Dispatcher {
    sources: HashMap<String, Box<dyn PageSource>>,
}

impl Dispatcher {
    #[must_use]
    pub fn new() -> Self {
        let mut sources: HashMap<String, Box<dyn PageSource>> = HashMap::new();
        sources.insert("pdf".into(), Box::new(PdfSource::new()));
        for ext in &["txt", "text"] {
            sources.insert((*ext).into(), Box::new(PlaintextSource::new()));
        }
        Self { sources }
    }

    /// Read page texts from `path`.
    pub fn pages(&self, path: &Path) -> Result<Vec<String>> {
        if !path.exists() {
            return Err(ResumeError::FileNotFound {
                path: path.to_string_lossy().into(),
            });
        }
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        match self.sources.get(&ext) {
            Some(source) => source.pages(path),
            None => Err(ResumeError::UnsupportedInput { ext }),
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
