use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ResumeError};

/// Config filename looked up in the working directory.
const CONFIG_FILE: &str = "resume-parse.toml";

/// Resolved configuration for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// User settings loaded from the config file.
    pub settings: UserSettings,
}

/// User-configurable settings from resume-parse.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// Section parser configuration.
    pub parser: ParserSettings,
    /// Output configuration.
    pub output: OutputSettings,
    /// Link resolution configuration.
    pub links: LinkSettings,
}

/// What to do when a section title or entry name repeats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Later value replaces the earlier one in place.
    #[default]
    Overwrite,
    /// Fail the parse.
    Reject,
    /// Keep both, numbering the later key.
    Suffix,
}

/// Section parser settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserSettings {
    /// Number of leading paragraphs flattened into the header block.
    pub header_paragraphs: usize,
    /// Title of the skills section (case-insensitive).
    pub skills_title: String,
    /// Title of the education section (exact match).
    pub education_title: String,
    /// Prefix that starts a new bullet line.
    pub bullet_marker: String,
    pub duplicates: DuplicatePolicy,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            header_paragraphs: 5,
            skills_title: "Skills".into(),
            education_title: "Education".into(),
            bullet_marker: "- ".into(),
            duplicates: DuplicatePolicy::Overwrite,
        }
    }
}

/// Output rendering formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Minified JSON.
    #[default]
    Json,
    /// Indented JSON.
    Pretty,
    Yaml,
    /// Indented key/value tree.
    Tree,
}

/// Output-related settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

/// Link resolution settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkSettings {
    /// JSON file mapping anchor text to target URL.
    pub map_file: Option<String>,
}

impl Config {
    /// Load config from an explicit path, falling back to defaults.
    pub fn new(config_path: impl AsRef<Path>) -> Self {
        let settings = Self::load_settings(config_path.as_ref()).unwrap_or_default();
        Self { settings }
    }

    /// Load config from `resume-parse.toml` in the current working directory.
    pub fn from_cwd() -> Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| ResumeError::Config(format!("cannot get cwd: {e}")))?;
        Ok(Self::new(cwd.join(CONFIG_FILE)))
    }

    /// Load settings from the config file if it exists.
    fn load_settings(config_path: &Path) -> Option<UserSettings> {
        if !config_path.exists() {
            return None;
        }
        let content = std::fs::read_to_string(config_path).ok()?;
        match toml::from_str(&content) {
            Ok(settings) => Some(settings),
            Err(e) => {
                tracing::warn!(path = %config_path.display(), "ignoring invalid config: {e}");
                None
            }
        }
    }
}
