//! Error types for the graph-beta-models crate.

use std::path::PathBuf;

/// Errors that can occur while decoding or encoding Graph model payloads.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A wire string is not a member of the enumeration's declared set.
    #[error("unrecognized {type_name} value '{value}'")]
    UnrecognizedEnumValue {
        type_name: &'static str,
        value: String,
    },

    /// A wire node had a different JSON type than the getter expected.
    #[error("expected {expected} but found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// A wire value had the right JSON type but could not be converted.
    #[error("invalid {kind} value '{value}': {reason}")]
    InvalidValue {
        kind: &'static str,
        value: String,
        reason: String,
    },

    /// JSON parse error.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to read a document from disk.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write a document to disk.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An enumeration type name was not found in the catalog.
    #[error("enum '{name}' not found (available: {available})")]
    UnknownEnumType { name: String, available: String },

    /// A model name was not found in the catalog.
    #[error("model '{name}' not found (available: {available})")]
    UnknownModel { name: String, available: String },
}

/// Convenience alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
