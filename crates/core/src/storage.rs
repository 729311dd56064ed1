//! Key-value storage seam for the cart.
//!
//! The cart persists as one string value under one key. Backends only need
//! `get` and `set`; there is no delete, no iteration, no transactions.
//! Writes replace the whole value - last writer wins, uncoordinated with
//! any other process sharing the backend.

use std::collections::HashMap;

use thiserror::Error;

/// Errors a storage backend can produce.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading a key failed (not "key absent" - that is `Ok(None)`).
    #[error("failed to read key '{key}': {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing a key failed.
    #[error("failed to write key '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Encoding a value for storage failed.
    #[error("failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A persistent string-to-string key-value store.
pub trait Storage: Send {
    /// Read the value under `key`, or `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] if the backend could not be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] if the backend could not be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory storage backend.
///
/// The test double for the file-backed store: same contract, no disk.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with key-value pairs.
    #[must_use]
    pub fn with_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
