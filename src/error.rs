use crate::json::JsonKind;
use thiserror::Error;

/// Structural failure: a required container is missing or mistyped, or the
/// JSON text itself does not parse. Aborts the enclosing parse call; any
/// entities built before the failure point are dropped with the temporary
/// arena, so no partial structure ever reaches the caller.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input text is not well-formed JSON.
    #[error("malformed JSON text: {0}")]
    ParseFailed(#[from] serde_json::Error),

    /// A required container key or element is absent. The path names the
    /// missing container relative to the document root.
    #[error("required container `{path}` is missing")]
    NotFound { path: String },

    /// A required container exists but has the wrong JSON kind.
    #[error("`{path}` is {found}, expected {expected}")]
    WrongType {
        path: String,
        expected: JsonKind,
        found: JsonKind,
    },

    /// Reply nesting went deeper than the configured limit.
    #[error("reply nesting deeper than the configured limit of {limit}")]
    DepthExceeded { limit: usize },
}

impl ParseError {
    pub(crate) fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub(crate) fn wrong_type(path: impl Into<String>, expected: JsonKind, found: JsonKind) -> Self {
        Self::WrongType {
            path: path.into(),
            expected,
            found,
        }
    }
}

/// Field-level failure from the string field extractor. Callers that treat
/// optional fields tolerantly map any of these to "field absent".
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// The key is not present in the object.
    #[error("field is absent")]
    Missing,

    /// The key is present but its value is not a JSON string.
    #[error("field is {0}, expected a string")]
    WrongType(JsonKind),

    /// The value is a string of length zero.
    #[error("field is an empty string")]
    Empty,
}
