//! Error taxonomy shared by the store and storage layers.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong inside the purchase store.
///
/// All four variants are surfaced to the CLI layer; the store never
/// partially applies a mutation (validation runs before any in-memory
/// change).
#[derive(Error, Debug)]
pub enum StoreError {
    /// A user-supplied field value failed validation.
    #[error("invalid field value: {0}")]
    Validation(String),

    /// An operation referenced a record id that does not exist.
    #[error("no purchase record with id {0}")]
    NotFound(u64),

    /// The data file exists but does not parse as a purchase list.
    #[error("data file {} is corrupted: {source}", path.display())]
    CorruptData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An underlying filesystem operation failed.
    #[error("file system error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        StoreError::Validation(msg.into())
    }
}
