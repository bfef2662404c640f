//! Section parser: turns the normalized text blob into a [`ResumeDocument`].
//!
//! The blob is cut into paragraphs on blank lines. The first few paragraphs
//! form the header block whatever they contain; every later paragraph is a
//! section whose first line is its title.

pub mod entries;
pub mod fields;
pub mod skills;

use crate::config::{DuplicatePolicy, ParserSettings};
use crate::error::{Result, ResumeError};
use crate::models::{OrderedMap, ResumeDocument, Section, HEADER_TITLE};

pub use entries::{parse_entries, EntryBuilder};
pub use skills::parse_skills;

/// Paragraph boundary in the normalized text.
const PARAGRAPH_BREAK: &str = "\n\n";

/// Extraction strategy for a section, resolved once from its title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// Category-to-skills table.
    Skills,
    /// Dated entries with degree and major fields.
    Education,
    /// Dated entries with place and position fields.
    General,
}

impl SectionKind {
    #[must_use]
    pub fn classify(title: &str, settings: &ParserSettings) -> Self {
        if title.to_lowercase() == settings.skills_title.to_lowercase() {
            Self::Skills
        } else if title == settings.education_title {
            Self::Education
        } else {
            Self::General
        }
    }
}

/// A non-empty paragraph as trimmed, non-empty lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph<'a> {
    pub lines: Vec<&'a str>,
}

impl<'a> Paragraph<'a> {
    /// First line, used as the section title.
    #[must_use]
    pub fn title(&self) -> &'a str {
        self.lines.first().copied().unwrap_or_default()
    }

    /// Lines after the title.
    #[must_use]
    pub fn content(&self) -> &[&'a str] {
        self.lines.get(1..).unwrap_or_default()
    }
}

/// Split text into paragraphs, dropping those with no visible content.
#[must_use]
pub fn split_paragraphs(text: &str) -> Vec<Paragraph<'_>> {
    text.split(PARAGRAPH_BREAK)
        .map(|p| Paragraph {
            lines: p.lines().map(str::trim).filter(|l| !l.is_empty()).collect(),
        })
        .filter(|p| !p.lines.is_empty())
        .collect()
}

/// Insert `value` under `key` following the duplicate policy; returns the key
/// actually used.
pub(crate) fn insert_with_policy<V>(
    map: &mut OrderedMap<V>,
    key: &str,
    value: V,
    policy: DuplicatePolicy,
    rejected: impl FnOnce() -> ResumeError,
) -> Result<String> {
    if !map.contains_key(key) {
        map.insert(key, value);
        return Ok(key.to_string());
    }
    match policy {
        DuplicatePolicy::Overwrite => {
            tracing::warn!(key, "duplicate key replaces earlier value");
            map.insert(key, value);
            Ok(key.to_string())
        }
        DuplicatePolicy::Reject => Err(rejected()),
        DuplicatePolicy::Suffix => {
            let unique = (2..)
                .map(|n| format!("{key} ({n})"))
                .find(|candidate| !map.contains_key(candidate))
                .unwrap_or_else(|| key.to_string());
            tracing::debug!(key, unique = %unique, "renaming duplicate key");
            map.insert(unique.clone(), value);
            Ok(unique)
        }
    }
}

/// Parses normalized resume text.
#[derive(Debug, Clone, Default)]
pub struct SectionParser {
    settings: ParserSettings,
}

impl SectionParser {
    #[must_use]
    pub fn new(settings: ParserSettings) -> Self {
        Self { settings }
    }

    /// Parse the whole document. Any structural error aborts the parse.
    pub fn parse(&self, text: &str) -> Result<ResumeDocument> {
        let paragraphs = split_paragraphs(text);
        let split = paragraphs.len().min(self.settings.header_paragraphs);
        let (header, sections) = paragraphs.split_at(split);

        let mut doc = ResumeDocument::new();
        let header_lines = header
            .iter()
            .flat_map(|p| p.lines.iter().map(|l| (*l).to_string()))
            .collect();
        doc.sections.insert(HEADER_TITLE, Section::Header(header_lines));

        for paragraph in sections {
            let title = paragraph.title();
            let section = self.parse_section(title, paragraph.content())?;
            insert_with_policy(
                &mut doc.sections,
                title,
                section,
                self.settings.duplicates,
                || ResumeError::DuplicateSection {
                    title: title.to_string(),
                },
            )?;
        }

        tracing::debug!(sections = doc.sections.len(), "parsed resume");
        Ok(doc)
    }

    fn parse_section(&self, title: &str, content: &[&str]) -> Result<Section> {
        let kind = SectionKind::classify(title, &self.settings);
        tracing::debug!(title, ?kind, lines = content.len(), "dispatching section");
        match kind {
            SectionKind::Skills => Ok(Section::Skills(parse_skills(content))),
            SectionKind::Education | SectionKind::General => parse_entries(
                title,
                kind,
                content,
                &self.settings.bullet_marker,
                self.settings.duplicates,
            )
            .map(Section::Entries),
        }
    }
}

/// Parse with default settings.
pub fn parse_document(text: &str) -> Result<ResumeDocument> {
    SectionParser::default().parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Jane Doe\n\nEngineer\n\njane@x.dev\n\nBerlin\n\nhttps://jane.dev";

    fn with_header(body: &str) -> String {
        format!("{HEADER}\n\n{body}")
    }

    #[test]
    fn header_takes_first_five_paragraphs() {
        let doc = parse_document(&with_header("Skills\nTools: Git")).unwrap();
        assert_eq!(
            doc.header().unwrap(),
            &["Jane Doe", "Engineer", "jane@x.dev", "Berlin", "https://jane.dev"]
        );
    }

    #[test]
    fn header_is_positional_not_content_based() {
        let text = "Skills\nTools: Git\n\nA\nB\n\nC\n\nD\n\nE\n\nSkills\nLang: Rust";
        let doc = parse_document(text).unwrap();
        assert_eq!(
            doc.header().unwrap(),
            &["Skills", "Tools: Git", "A", "B", "C", "D", "E"]
        );
        assert_eq!(doc.skills("Skills").unwrap().keys().collect::<Vec<_>>(), vec!["Lang"]);
    }

    #[test]
    fn short_document_is_all_header() {
        let doc = parse_document("Jane Doe\n\nEngineer").unwrap();
        assert_eq!(doc.header().unwrap(), &["Jane Doe", "Engineer"]);
        assert_eq!(doc.sections.len(), 1);
    }

    #[test]
    fn empty_document_has_empty_header() {
        let doc = parse_document("").unwrap();
        assert_eq!(doc.header().unwrap(), &[] as &[String]);
    }

    #[test]
    fn blank_paragraphs_are_discarded() {
        let paragraphs = split_paragraphs("a\n\n   \n\n\n\nb\n  c  ");
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[1].lines, vec!["b", "c"]);
    }

    #[test]
    fn skills_round_trip() {
        let doc =
            parse_document(&with_header("Skills\nLanguages: Go, Rust, Python\nTools: Git"))
                .unwrap();
        let json = serde_json::to_string(doc.section("Skills").unwrap()).unwrap();
        assert_eq!(json, r#"{"Languages":["Go","Rust","Python"],"Tools":["Git"]}"#);
    }

    #[test]
    fn skills_title_is_case_insensitive() {
        let doc = parse_document(&with_header("SKILLS\nTools: Git")).unwrap();
        assert!(doc.skills("SKILLS").is_some());
    }

    #[test]
    fn education_title_is_exact() {
        let doc = parse_document(&with_header(
            "education\nState University — B.Sc. | 2016 - 2020",
        ))
        .unwrap();
        let entry = doc
            .entries("education")
            .unwrap()
            .get("State University")
            .unwrap();
        assert_eq!(entry.position.as_deref(), Some("B.Sc."));
        assert!(entry.degree_type.is_none());
    }

    #[test]
    fn education_date_default() {
        let doc =
            parse_document(&with_header("Education\nState University — B.Sc. | 2020")).unwrap();
        let entry = doc
            .entries("Education")
            .unwrap()
            .get("State University")
            .unwrap();
        assert_eq!(entry.date_start.as_deref(), Some("2020"));
        assert_eq!(entry.date_end.as_deref(), Some("2020"));
    }

    #[test]
    fn generic_entry_fields() {
        let doc = parse_document(&with_header(
            "Experience\nAcme, Remote — Engineer | 2019 - 2021\n- Built system X\nto handle Y",
        ))
        .unwrap();
        let acme = doc.entries("Experience").unwrap().get("Acme").unwrap();
        assert_eq!(acme.place.as_deref(), Some("Remote"));
        assert_eq!(acme.position.as_deref(), Some("Engineer"));
        assert_eq!(acme.date_start.as_deref(), Some("2019"));
        assert_eq!(acme.date_end.as_deref(), Some("2021"));
        assert_eq!(acme.data, vec!["Built system X to handle Y"]);
    }

    #[test]
    fn orphan_line_aborts_whole_parse() {
        let err = parse_document(&with_header(
            "Experience\nAcme | 2020\n- ok\n\nProjects\njust text",
        ))
        .unwrap_err();
        assert!(err.is_structural());
        assert!(
            matches!(err, ResumeError::DetailWithoutHeader { ref section, ref line } if section == "Projects" && line == "just text")
        );
    }

    #[test]
    fn title_only_section_is_empty_table() {
        let doc = parse_document(&with_header("Awards")).unwrap();
        assert!(doc.entries("Awards").unwrap().is_empty());
    }

    #[test]
    fn sections_keep_first_appearance_order() {
        let doc = parse_document(&with_header(
            "Experience\nA | 2020\n\nSkills\nT: Git\n\nExperience\nB | 2021",
        ))
        .unwrap();
        assert_eq!(
            doc.sections.keys().collect::<Vec<_>>(),
            vec!["Header", "Experience", "Skills"]
        );
        let experience = doc.entries("Experience").unwrap();
        assert!(experience.contains_key("B"));
        assert!(!experience.contains_key("A"));
    }

    #[test]
    fn duplicate_section_rejected_when_configured() {
        let parser = SectionParser::new(ParserSettings {
            duplicates: DuplicatePolicy::Reject,
            ..ParserSettings::default()
        });
        let err = parser
            .parse(&with_header("Projects\nA | 2020\n\nProjects\nB | 2021"))
            .unwrap_err();
        assert!(matches!(err, ResumeError::DuplicateSection { ref title } if title == "Projects"));
    }

    #[test]
    fn duplicate_section_suffixed_when_configured() {
        let parser = SectionParser::new(ParserSettings {
            duplicates: DuplicatePolicy::Suffix,
            ..ParserSettings::default()
        });
        let doc = parser
            .parse(&with_header("Projects\nA | 2020\n\nProjects\nB | 2021"))
            .unwrap();
        assert!(doc.entries("Projects").unwrap().contains_key("A"));
        assert!(doc.entries("Projects (2)").unwrap().contains_key("B"));
    }

    #[test]
    fn header_paragraph_count_is_configurable() {
        let parser = SectionParser::new(ParserSettings {
            header_paragraphs: 1,
            ..ParserSettings::default()
        });
        let doc = parser.parse("Jane Doe\n\nSkills\nTools: Git").unwrap();
        assert_eq!(doc.header().unwrap(), &["Jane Doe"]);
        assert!(doc.skills("Skills").is_some());
    }

    #[test]
    fn classify_resolves_once_per_title() {
        let settings = ParserSettings::default();
        assert_eq!(SectionKind::classify("skills", &settings), SectionKind::Skills);
        assert_eq!(SectionKind::classify("Education", &settings), SectionKind::Education);
        assert_eq!(SectionKind::classify("EDUCATION", &settings), SectionKind::General);
        assert_eq!(SectionKind::classify("Projects", &settings), SectionKind::General);
    }
}
