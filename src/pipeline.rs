use std::path::Path;

use crate::config::{Config, ParserSettings};
use crate::error::Result;
use crate::ingest::{resolve_or_empty, AnchorMap, Dispatcher, LinkMapFile, LinkResolver, NoLinks};
use crate::models::ResumeDocument;
use crate::normalize::normalize;
use crate::parser::SectionParser;

/// Parse page texts and an anchor map into a resume document.
pub fn parse_resume<S: AsRef<str>>(
    pages: &[S],
    anchors: &AnchorMap,
    settings: &ParserSettings,
) -> Result<ResumeDocument> {
    let text = normalize(pages, anchors);
    SectionParser::new(settings.clone()).parse(&text)
}

/// Everything needed to turn one input file into a resume document.
pub struct Pipeline {
    dispatcher: Dispatcher,
    resolver: Box<dyn LinkResolver>,
    settings: ParserSettings,
}

impl Pipeline {
    #[must_use]
    pub fn new(resolver: Box<dyn LinkResolver>, settings: ParserSettings) -> Self {
        Self {
            dispatcher: Dispatcher::new(),
            resolver,
            settings,
        }
    }

    /// Build from config: a configured link map file, else no links.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let resolver: Box<dyn LinkResolver> = match &config.settings.links.map_file {
            Some(path) => Box::new(LinkMapFile::new(path)),
            None => Box::new(NoLinks),
        };
        Self::new(resolver, config.settings.parser.clone())
    }

    /// Read, link-substitute and normalize the document text.
    pub fn normalized_text(&self, path: &Path) -> Result<String> {
        let pages = self.dispatcher.pages(path)?;
        let anchors = resolve_or_empty(self.resolver.as_ref(), path);
        tracing::debug!(
            path = %path.display(),
            pages = pages.len(),
            anchors = anchors.len(),
            "normalizing document"
        );
        Ok(normalize(&pages, &anchors))
    }

    /// Parse the document at `path`.
    pub fn parse_file(&self, path: &Path) -> Result<ResumeDocument> {
        let text = self.normalized_text(path)?;
        SectionParser::new(self.settings.clone()).parse(&text)
    }
}
