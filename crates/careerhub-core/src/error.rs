//! Record store error types.
//!
//! A malformed persisted document is not an error: the store falls back to
//! seed data. These variants cover everything that can still go wrong.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::RecordKind;

/// Errors returned by record store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage backend failed to read, write, or remove a document.
    #[error("storage error for key '{key}': {source}")]
    Storage {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A snapshot could not be written to the export path.
    #[error("failed to export to {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document could not be serialized.
    #[error("failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),

    /// No record with the given id exists.
    #[error("{kind} not found: {id}")]
    NotFound { kind: RecordKind, id: String },

    /// A required field was missing or empty.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// There are no students to act on.
    #[error("no current student")]
    NoCurrentStudent,
}

impl StoreError {
    pub(crate) fn storage(key: &str, source: std::io::Error) -> Self {
        StoreError::Storage {
            key: key.to_string(),
            source,
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
