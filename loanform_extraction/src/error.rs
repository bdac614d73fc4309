use thiserror::Error;

/// Failure to build a [`crate::PatternLibrary`].
///
/// Every variant is a defect in the field definitions, so callers are expected
/// to stop rather than run with a partial library.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("field `{name}` has an invalid pattern: {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("field `{name}` pattern has no capture group for the value")]
    MissingCaptureGroup { name: String },

    #[error("duplicate field name `{0}`")]
    DuplicateName(String),

    #[error("field name must not be empty")]
    EmptyName,
}
