use std::path::PathBuf;
use thiserror::Error;

/// What went wrong while reading a schema, without the position.
///
/// Grammar rules and the field-id verifier return this; the builder pins it
/// to a line with [ErrorKind::at].
#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("Unable to read schema source: {0}")]
    UnreadableSource(#[from] std::io::Error),

    #[error("The schema does not end with a closing message marker")]
    UnclosedMessage,

    #[error("Unrecognized line {text}: {reason}")]
    UnrecognizedLine {
        text:   String,
        reason: String,
    },

    #[error("Message field id must be unique, field: {field} (id {id} in message {message})")]
    DuplicateFieldId {
        message: String,
        field:   String,
        id:      u32,
    },

    #[error("The schema does not declare any message")]
    NoMessages,
}

impl ErrorKind {
    pub fn at(self, line: usize) -> SchemaValidationError {
        SchemaValidationError { line, kind: self }
    }
}

/// A failure while ingesting a schema, tagged with the 1-based line that was
/// being read when it was detected.
#[derive(Debug, Error)]
#[error("Error at line {line}: {kind}")]
pub struct SchemaValidationError {
    pub line: usize,
    #[source]
    pub kind: ErrorKind,
}

#[derive(Debug, Error)]
pub enum ProtoError {
    #[error("Invalid schema path {}: {reason}", path.display())]
    InvalidPath {
        path:   PathBuf,
        reason: String,
    },

    #[error(transparent)]
    Validation(#[from] SchemaValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
