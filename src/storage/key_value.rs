use crate::storage::errors::StorageError;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

const TMP_SUFFIX: &str = "tmp";

/// A string-to-string store with single-key atomic writes.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Key-value store persisted as one JSON object in a file.
///
/// A missing or empty file reads as an empty store. Every write replaces the
/// whole file through a temporary sibling that is renamed into place.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    path: PathBuf
}

impl FileKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into()
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = fs::read_to_string(&self.path)?;

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents).map_err(|source| StorageError::MalformedFile {
            path: self.path.clone(),
            source
        })
    }

    fn write_all(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(items)?;
        let tmp = tmp_path(&self.path);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.read_all()?;
        items.insert(key.to_string(), value.to_string());
        self.write_all(&items)?;

        debug!("Wrote key [{key}] to [{}]", self.path.display());

        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut file_name = path.file_name().map(|name| name.to_os_string()).unwrap_or_default();
    file_name.push(".");
    file_name.push(TMP_SUFFIX);
    path.with_file_name(file_name)
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    items: RefCell<HashMap<String, String>>
}

#[cfg(test)]
impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
