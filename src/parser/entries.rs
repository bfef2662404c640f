//! Dated-entry sections: experience, education, projects and the like.
//!
//! Lines are folded through an explicit state machine. A header line opens an
//! entry, a bullet line starts a detail item, and any other line continues the
//! last bullet.

use crate::config::DuplicatePolicy;
use crate::error::{Result, ResumeError};
use crate::models::{Entry, EntryTable};
use crate::parser::fields::{is_entry_header, parse_education_header, parse_entry_header};
use crate::parser::{insert_with_policy, SectionKind};

/// An entry whose header has been read but which is not yet in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
struct OpenEntry {
    name: String,
    entry: Entry,
}

/// Where the builder is within the current paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
enum EntryState {
    /// No entry header seen yet.
    AwaitingHeader,
    /// Inside an entry, no bullet yet.
    InEntry(OpenEntry),
    /// Inside an entry; wrapped lines extend the bullet at this index.
    InBullet(OpenEntry, usize),
}

/// Accumulates the entry table for one section paragraph.
pub struct EntryBuilder<'a> {
    section: &'a str,
    kind: SectionKind,
    bullet_marker: &'a str,
    duplicates: DuplicatePolicy,
    entries: EntryTable,
    state: EntryState,
}

impl<'a> EntryBuilder<'a> {
    #[must_use]
    pub fn new(
        section: &'a str,
        kind: SectionKind,
        bullet_marker: &'a str,
        duplicates: DuplicatePolicy,
    ) -> Self {
        Self {
            section,
            kind,
            bullet_marker,
            duplicates,
            entries: EntryTable::new(),
            state: EntryState::AwaitingHeader,
        }
    }

    /// Feed one trimmed, non-empty content line.
    pub fn push_line(&mut self, line: &str) -> Result<()> {
        if is_entry_header(line) {
            let header = match self.kind {
                SectionKind::Education => parse_education_header(line),
                _ => None,
            };
            let (name, entry) = header.unwrap_or_else(|| parse_entry_header(line));
            self.close_entry()?;
            self.state = EntryState::InEntry(OpenEntry { name, entry });
            return Ok(());
        }

        if let Some(text) = line.strip_prefix(self.bullet_marker) {
            self.push_bullet(line, text.trim_start())
        } else {
            self.continue_bullet(line)
        }
    }

    /// Finish the paragraph and hand back its entries.
    pub fn finish(mut self) -> Result<EntryTable> {
        self.close_entry()?;
        Ok(self.entries)
    }

    fn push_bullet(&mut self, line: &str, text: &str) -> Result<()> {
        match std::mem::replace(&mut self.state, EntryState::AwaitingHeader) {
            EntryState::AwaitingHeader => Err(self.detail_without_header(line)),
            EntryState::InEntry(mut open) | EntryState::InBullet(mut open, _) => {
                let bullet = open.entry.push_bullet(text);
                self.state = EntryState::InBullet(open, bullet);
                Ok(())
            }
        }
    }

    fn continue_bullet(&mut self, line: &str) -> Result<()> {
        if let EntryState::InBullet(open, bullet) = &mut self.state {
            open.entry.extend_bullet(*bullet, line);
            return Ok(());
        }
        match self.state {
            EntryState::InEntry(_) => Err(ResumeError::ContinuationWithoutBullet {
                section: self.section.to_string(),
                line: line.to_string(),
            }),
            _ => Err(self.detail_without_header(line)),
        }
    }

    /// Move the open entry, if any, into the table.
    fn close_entry(&mut self) -> Result<()> {
        let open = match std::mem::replace(&mut self.state, EntryState::AwaitingHeader) {
            EntryState::AwaitingHeader => return Ok(()),
            EntryState::InEntry(open) | EntryState::InBullet(open, _) => open,
        };
        let section = self.section;
        let OpenEntry { name, entry } = open;
        insert_with_policy(&mut self.entries, &name, entry, self.duplicates, || {
            ResumeError::DuplicateEntry {
                section: section.to_string(),
                name: name.clone(),
            }
        })?;
        Ok(())
    }

    fn detail_without_header(&self, line: &str) -> ResumeError {
        ResumeError::DetailWithoutHeader {
            section: self.section.to_string(),
            line: line.to_string(),
        }
    }
}

/// Build the entry table for a section from its content lines.
pub fn parse_entries(
    section: &str,
    kind: SectionKind,
    lines: &[&str],
    bullet_marker: &str,
    duplicates: DuplicatePolicy,
) -> Result<EntryTable> {
    let mut builder = EntryBuilder::new(section, kind, bullet_marker, duplicates);
    for line in lines {
        builder.push_line(line)?;
    }
    builder.finish()
}
