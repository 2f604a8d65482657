use thiserror::Error;

/// Errors returned when decoding or encoding an external wallet record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input was not a JSON object, or a recognized key held the wrong type.
    #[error("malformed JSON: {0}")]
    MalformedJson(String),
}

impl From<serde_json::Error> for ParseError {
    fn from(e: serde_json::Error) -> Self {
        ParseError::MalformedJson(e.to_string())
    }
}

/// Errors returned when building a [`crate::LabelTable`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("invalid label table: {0}")]
    InvalidTable(String),
}

impl From<serde_json::Error> for LabelError {
    fn from(e: serde_json::Error) -> Self {
        LabelError::InvalidTable(e.to_string())
    }
}
