use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("file not found: {path}")]
    FileNotFound { path: String },

    #[error("pdf error in {path}: {detail}")]
    Pdf { path: String, detail: String },

    #[error("unsupported input type: {ext}")]
    UnsupportedInput { ext: String },

    #[error("detail line without a header in section {section:?}: {line}")]
    DetailWithoutHeader { section: String, line: String },

    #[error("continuation without a bullet in section {section:?}: {line}")]
    ContinuationWithoutBullet { section: String, line: String },

    #[error("duplicate section: {title}")]
    DuplicateSection { title: String },

    #[error("duplicate entry {name:?} in section {section:?}")]
    DuplicateEntry { section: String, name: String },

    #[error("link map error in {path}: {detail}")]
    LinkMap { path: String, detail: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("config error: {0}")]
    Config(String),
}

impl ResumeError {
    /// True for errors raised by the section parser on malformed input.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::DetailWithoutHeader { .. }
                | Self::ContinuationWithoutBullet { .. }
                | Self::DuplicateSection { .. }
                | Self::DuplicateEntry { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ResumeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_errors_name_the_line() {
        let err = ResumeError::DetailWithoutHeader {
            section: "Experience".into(),
            line: "just text".into(),
        };
        assert!(err.is_structural());
        assert!(err.to_string().contains("just text"));
        assert!(err.to_string().contains("Experience"));
    }

    #[test]
    fn io_errors_are_not_structural() {
        let err: ResumeError = std::io::Error::other("boom").into();
        assert!(!err.is_structural());
    }
}
