use std::path::Path;

use crate::error::Result;
use crate::ingest::text::{split_pages, PageSource};

/// Reads already-extracted text; form feeds separate pages.
pub struct PlaintextSource;

impl Default for PlaintextSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaintextSource {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PageSource for PlaintextSource {
    fn pages(&self, path: &Path) -> Result<Vec<String>> {
        let text = std::fs::read_to_string(path)?;
        Ok(split_pages(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reads_pages_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("resume.txt");
        std::fs::write(&path, "Jane Doe\x0CPage two\n").unwrap();

        let pages = PlaintextSource::new().pages(&path).unwrap();
        assert_eq!(pages, vec!["Jane Doe", "Page two\n"]);
    }
}
