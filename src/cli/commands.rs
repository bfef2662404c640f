use clap::{Parser, Subcommand};

use crate::config::{DuplicatePolicy, OutputFormat};

#[derive(Parser)]
#[command(
    name = "resume-parse",
    version,
    about = "Turn a resume PDF into a structured, section-labeled record",
    after_help = "Set RUST_LOG=debug to see how each section was dispatched. \
                  Settings are read from ./resume-parse.toml unless --config is given."
)]
pub struct Cli {
    /// Config file (default: ./resume-parse.toml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse a resume into header, skills and dated-entry sections.
    ///
    /// Accepts a PDF or already-extracted plain text (.txt, form feeds
    /// between pages). Any detail line that cannot be attached to an entry
    /// fails the whole parse.
    Parse {
        /// Resume file
        #[arg(default_value = "Resume.pdf")]
        path: String,
        /// JSON file mapping link anchor text to URL
        #[arg(short, long)]
        links: Option<String>,
        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
        /// How to treat repeated section titles and entry names
        #[arg(long, value_enum)]
        duplicates: Option<DuplicatePolicy>,
    },

    /// Print the normalized text the parser sees
    Text {
        /// Resume file
        #[arg(default_value = "Resume.pdf")]
        path: String,
        /// JSON file mapping link anchor text to URL
        #[arg(short, long)]
        links: Option<String>,
    },
}
