pub mod pdf;
pub mod plaintext;

use std::path::Path;

use crate::error::Result;

/// Page separator emitted by PDF text extraction.
pub const FORM_FEED: char = '\x0C';

/// Trait for sources that yield page-ordered plain text.
pub trait PageSource: Send + Sync {
    /// Read the document and return one string per page.
    fn pages(&self, path: &Path) -> Result<Vec<String>>;
}

/// Split extracted text into pages on form feeds.
///
/// A trailing separator does not produce an extra empty page.
#[must_use]
pub fn split_pages(text: &str) -> Vec<String> {
    let mut pages: Vec<String> = text.split(FORM_FEED).map(str::to_string).collect();
    if pages.len() > 1 && pages.last().is_some_and(|p| p.trim().is_empty()) {
        pages.pop();
    }
    pages
}
