/// Errors that can occur in mood-lens operations.
///
/// Text normalization and mood lookup never produce these; they come from
/// loading and validating catalog files.
#[derive(Debug, thiserror::Error)]
pub enum MoodLensError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("catalog error: {0}")]
    Catalog(String),
}

impl From<std::io::Error> for MoodLensError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MoodLensError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
