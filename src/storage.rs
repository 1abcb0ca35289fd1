//! Local Storage Module
//!
//! File-backed key-value store for persisted JSON blobs. Each key maps to
//! a single `<key>.json` file under the data directory.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use crate::error::Result;

// == Local Store ==
/// String-keyed blob storage backed by the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalStore {
    /// Directory holding one file per key
    root: PathBuf,
}

impl LocalStore {
    // == Constructor ==
    /// Opens a store rooted at the given directory, creating it if needed.
    ///
    /// # Arguments
    /// * `root` - Directory to hold the persisted blobs
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    // == Read ==
    /// Reads the blob stored under `key`, or `None` if no blob exists.
    pub fn read(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    // == Write ==
    /// Writes `value` under `key`, replacing any previous blob.
    pub fn write(&self, key: &str, value: &str) -> Result<()> {
        fs::write(self.key_path(key), value)?;
        debug!("Wrote {} bytes under key '{}'", value.len(), key);
        Ok(())
    }

    // == Remove ==
    /// Removes the blob stored under `key`.
    ///
    /// Removing a key that does not exist is a no-op.
    pub fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
