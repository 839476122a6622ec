//! Error types for tagged-JSON transformation.

use thiserror::Error;

/// Errors that abort a whole document transformation.
#[derive(Error, Debug)]
pub enum TransformError {
    /// The input was not valid JSON, or the output could not be serialized.
    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The top level of the document was valid JSON but not an object.
    /// Carries the JSON type that was found instead.
    #[error("expected a JSON object at the top level, found {0}")]
    NotAnObject(&'static str),
}

/// A single value that failed its discriminator's rule.
///
/// These never abort a transformation: the enclosing map entry or list
/// element is dropped and the walk continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidValue {
    #[error("string is empty after trimming")]
    EmptyString,

    #[error("not a finite number: {0:?}")]
    Number(String),

    #[error("not a boolean token: {0:?}")]
    Bool(String),

    /// Only the truthy tokens mark a null; everything else lands here.
    #[error("not a null marker: {0:?}")]
    Null(String),
}

/// Convenience alias used throughout untag-core.
pub type Result<T> = std::result::Result<T, TransformError>;
