//! Persisted key-value slots
//!
//! A slot is a named string value that survives restarts. The file backend
//! keeps one `<key>.json` file per slot inside the application data
//! directory; the memory backend stands in for it in tests.

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use super::error::StorageError;

pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Synchronous key-value storage
pub trait KeyValueStorage {
    /// Read a slot. Returns `None` if the slot has never been written.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrite a slot with a new value
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Check that a key can safely name a file
pub fn validate_key(key: &str) -> StorageResult<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.');

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

/// Slots stored as files in a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Use `root` as the slot directory, creating it if needed
    pub fn new(root: impl Into<PathBuf>) -> StorageResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Use the platform data directory for this application
    pub fn in_data_dir() -> StorageResult<Self> {
        let root = default_data_dir().ok_or(StorageError::NoDataDir)?;
        Self::new(root)
    }

    /// Directory holding the slot files
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

/// Persist the rename itself; not supported on every platform
fn sync_dir(dir: &Path) {
    if !cfg!(unix) {
        return;
    }
    if let Err(e) = File::open(dir).and_then(|d| d.sync_all()) {
        tracing::warn!("Could not sync {}: {}", dir.display(), e);
    }
}

/// Platform data directory for this application
pub fn default_data_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "docmanager", "DocManager").map(|dirs| dirs.data_dir().to_path_buf())
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        validate_key(key)?;
        match fs::read_to_string(self.slot_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        validate_key(key)?;
        let path = self.slot_path(key);
        let tmp = self.root.join(format!(".{}.json.tmp", key));

        // Flush the temp file before renaming so the slot is never half-written
        let written = File::create(&tmp)
            .and_then(|mut file| {
                file.write_all(value.as_bytes())?;
                file.sync_all()
            })
            .and_then(|()| fs::rename(&tmp, &path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        sync_dir(&self.root);

        tracing::debug!("Wrote slot {} ({} bytes)", path.display(), value.len());
        Ok(())
    }
}

/// Slots kept in memory only
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        validate_key(key)?;
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        validate_key(key)?;
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for &T {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}
