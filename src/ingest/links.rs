//! Link resolution: visible anchor text to target URL.
//!
//! Reading link annotations out of a PDF and clipping the text under each
//! annotation rectangle is done by an external tool. This module consumes its
//! result as a JSON object and degrades to an empty map on any failure.

use std::path::{Path, PathBuf};

use crate::error::{Result, ResumeError};
use crate::models::OrderedMap;

/// Anchor text to target URL, in the order the resolver reported them.
pub type AnchorMap = OrderedMap<String>;

/// Source of anchor-to-URL mappings for a document.
pub trait LinkResolver {
    /// Resolve links for the document at `document`.
    fn resolve(&self, document: &Path) -> Result<AnchorMap>;
}

/// Resolver for documents without links.
pub struct NoLinks;

impl LinkResolver for NoLinks {
    fn resolve(&self, _document: &Path) -> Result<AnchorMap> {
        Ok(AnchorMap::new())
    }
}

/// Reads a JSON object `{"anchor": "url"}` from a side file.
pub struct LinkMapFile {
    path: PathBuf,
}

impl LinkMapFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn link_error(&self, detail: impl Into<String>) -> ResumeError {
        ResumeError::LinkMap {
            path: self.path.to_string_lossy().into(),
            detail: detail.into(),
        }
    }
}

impl LinkResolver for LinkMapFile {
    fn resolve(&self, _document: &Path) -> Result<AnchorMap> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| self.link_error(format!("cannot read: {e}")))?;
        let value: serde_json::Value = serde_json::from_str(&content)?;
        let object = value
            .as_object()
            .ok_or_else(|| self.link_error("expected a JSON object"))?;

        let mut anchors = AnchorMap::new();
        for (anchor, target) in object {
            let anchor = anchor.trim();
            if anchor.is_empty() {
                continue;
            }
            match target.as_str() {
                Some(url) if !url.is_empty() => {
                    anchors.insert(anchor, url.to_string());
                }
                _ => tracing::debug!(anchor, "skipping link without a string target"),
            }
        }
        Ok(anchors)
    }
}

/// Resolve links, logging and swallowing any failure.
pub fn resolve_or_empty(resolver: &dyn LinkResolver, document: &Path) -> AnchorMap {
    match resolver.resolve(document) {
        Ok(anchors) => anchors,
        Err(e) => {
            tracing::warn!("could not extract hyperlinks: {e}");
            AnchorMap::new()
        }
    }
}
