// Pedantic lint configuration for the crate.
// Most of these are reasonable but too strict for this codebase:
// - missing_errors_doc: Error handling is self-evident from Result types
// - missing_panics_doc: Panics are rare and documented inline
// - module_name_repetitions: Types like `ResumeError` read better fully named
// - needless_pass_by_value: Sometimes clearer semantically
// - single_match_else: match is clearer than if-let for pattern matching
// - manual_let_else: if-let with early return is often clearer in context
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::needless_pass_by_value,
    clippy::single_match_else,
    clippy::manual_let_else
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod normalize;
pub mod parser;
pub mod pipeline;

pub use error::{Result, ResumeError};
pub use models::{Entry, ResumeDocument, Section};
pub use pipeline::{parse_resume, Pipeline};
