//! Error types for gistsched.

use thiserror::Error;

/// Errors that can occur while loading, editing or saving a schedule.
///
/// The display text of every variant is what the user sees as the status
/// message, so it is written as a sentence rather than a code.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Please enter Gist ID, Filename, and Token.")]
    MissingInput,

    #[error("Could not find '{0}' in this gist (or it is truncated).")]
    FileNotFound(String),

    #[error("GitHub error: {status} {body}")]
    Remote { status: u16, body: String },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unsupported document: the root must be a JSON object or array, found {0}")]
    UnsupportedDocument(&'static str),

    #[error("Cannot place events at '{path}': existing value is {found}, not {expected}")]
    ShapeConflict {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("No document loaded")]
    NotLoaded,
}

/// Result type alias for gistsched operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Short name of a JSON value's kind, for error messages.
pub(crate) fn kind_of(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
