//! Error types for the storage and store layers

use thiserror::Error;

use super::document::DocumentId;

/// Errors produced by a key-value storage backend
#[derive(Error, Debug)]
pub enum StorageError {
    /// Key contains characters that cannot name a slot
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Failed to determine a platform data directory
    #[error("Could not determine application data directory")]
    NoDataDir,

    /// Underlying I/O failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced by the document store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A collection about to be persisted contains the same id twice
    #[error("Duplicate document id: {0}")]
    DuplicateId(DocumentId),

    /// Every id above the current highest one is taken
    #[error("No document ids left to assign")]
    IdsExhausted,
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
