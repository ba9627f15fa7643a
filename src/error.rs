#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Path is not a file: {0}")]
    NotAFile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-line problems. These never propagate to the caller: each one becomes
/// a single warning on the diagnostic stream and the line is skipped.
#[derive(Debug, thiserror::Error)]
pub enum LineIssue {
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    #[error("not a JSON object")]
    NotAnObject,

    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("field '{field}' has invalid type (expected {expected})")]
    WrongFieldType {
        field: &'static str,
        expected: &'static str,
    },
}
