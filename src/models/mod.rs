pub mod document;
pub mod entry;
pub mod ordered;

pub use document::{EntryTable, ResumeDocument, Section, SkillsTable, HEADER_TITLE};
pub use entry::Entry;
pub use ordered::OrderedMap;
