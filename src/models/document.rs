use serde::Serialize;

use crate::models::entry::Entry;
use crate::models::ordered::OrderedMap;

/// Skill category to skill names.
pub type SkillsTable = OrderedMap<Vec<String>>;

/// Entry name to entry.
pub type EntryTable = OrderedMap<Entry>;

/// Title of the positional header block.
pub const HEADER_TITLE: &str = "Header";

/// Parsed content of one resume section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Section {
    /// Trimmed lines from the leading paragraphs.
    Header(Vec<String>),
    Skills(SkillsTable),
    Entries(EntryTable),
}

impl Section {
    #[must_use]
    pub fn as_header(&self) -> Option<&[String]> {
        match self {
            Self::Header(lines) => Some(lines.as_slice()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_skills(&self) -> Option<&SkillsTable> {
        match self {
            Self::Skills(table) => Some(table),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_entries(&self) -> Option<&EntryTable> {
        match self {
            Self::Entries(table) => Some(table),
            _ => None,
        }
    }
}

/// A whole parsed resume, keyed by section title in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResumeDocument {
    pub sections: OrderedMap<Section>,
}

impl ResumeDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.get(title)
    }

    /// The header block, if the first paragraphs produced one.
    #[must_use]
    pub fn header(&self) -> Option<&[String]> {
        self.section(HEADER_TITLE).and_then(Section::as_header)
    }

    #[must_use]
    pub fn skills(&self, title: &str) -> Option<&SkillsTable> {
        self.section(title).and_then(Section::as_skills)
    }

    #[must_use]
    pub fn entries(&self, title: &str) -> Option<&EntryTable> {
        self.section(title).and_then(Section::as_entries)
    }
}
