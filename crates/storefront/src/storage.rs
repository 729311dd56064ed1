//! File-backed key-value storage.
//!
//! One directory, one file per key, value is the file's UTF-8 content.
//! Writes replace the whole file and are not coordinated with other
//! processes sharing the directory - last writer wins.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use sundry_core::{Storage, StorageError};

/// Key-value store rooted at a directory on the local filesystem.
#[derive(Debug)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create a store rooted at `root`.
    ///
    /// The directory is not created until the first write, so pointing at a
    /// missing directory reads as an empty store.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.root.join(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read {
                key: key.to_string(),
                source: e,
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let write_err = |e| StorageError::Write {
            key: key.to_string(),
            source: e,
        };

        fs::create_dir_all(&self.root).map_err(write_err)?;
        fs::write(self.root.join(key), value).map_err(write_err)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("does-not-exist"));
        assert!(storage.get("cart").unwrap().is_none());
    }

    #[test]
    fn set_creates_directory_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path().join("data"));

        storage.set("cart", r#"[{"id":"a"}]"#).unwrap();
        assert_eq!(
            storage.get("cart").unwrap().as_deref(),
            Some(r#"[{"id":"a"}]"#)
        );
    }

    #[test]
    fn set_replaces_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path());

        storage.set("cart", "first").unwrap();
        storage.set("cart", "second").unwrap();
        assert_eq!(storage.get("cart").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn value_survives_reopening_the_store() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut storage = FileStorage::new(dir.path());
            storage.set("cart", "[]").unwrap();
        }

        let storage = FileStorage::new(dir.path());
        assert_eq!(storage.get("cart").unwrap().as_deref(), Some("[]"));
    }
}
