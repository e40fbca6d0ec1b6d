//! Key/value storage backends
//!
//! `SessionStorage` has the shape of browser `localStorage`: string keys,
//! string values, reads never fail. Two backends:
//! - `MemoryStorage`: process-local map
//! - `FileStorage`: a JSON object on disk, re-read on every access so that
//!   separate processes see each other's writes

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::error::{SessionError, SessionResult};

/// String key/value store backing a session
pub trait SessionStorage: Send + Sync {
    /// Read a value; `None` when missing or unreadable
    fn get_item(&self, key: &str) -> Option<String>;

    /// Store a value, replacing any previous one
    fn set_item(&self, key: &str, value: &str) -> SessionResult<()>;

    /// Remove a value; removing a missing key is not an error
    fn remove_item(&self, key: &str) -> SessionResult<()>;
}

/// In-memory storage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn items(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.items.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> SessionResult<()> {
        self.items().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> SessionResult<()> {
        self.items().remove(key);
        Ok(())
    }
}

/// File-backed storage
///
/// The file holds a single JSON object of string values. Writes go to a
/// sibling temp file which is then renamed over the original.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole map; missing or malformed files read as empty
    fn load(&self) -> BTreeMap<String, String> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                tracing::warn!(path = ?self.path, error = %e, "Session file unreadable, treating as empty");
                return BTreeMap::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(path = ?self.path, error = %e, "Session file malformed, treating as empty");
                BTreeMap::new()
            }
        }
    }

    fn store(&self, items: &BTreeMap<String, String>) -> SessionResult<()> {
        let io_err = |source| SessionError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let json = serde_json::to_string_pretty(items)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(io_err)?;
        std::fs::rename(&tmp, &self.path).map_err(io_err)?;
        Ok(())
    }

    fn update(&self, f: impl FnOnce(&mut BTreeMap<String, String>)) -> SessionResult<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut items = self.load();
        f(&mut items);
        self.store(&items)
    }
}

impl SessionStorage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.load().remove(key)
    }

    fn set_item(&self, key: &str, value: &str) -> SessionResult<()> {
        self.update(|items| {
            items.insert(key.to_string(), value.to_string());
        })
    }

    fn remove_item(&self, key: &str) -> SessionResult<()> {
        self.update(|items| {
            items.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_storage() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("token"), None);

        storage.set_item("token", "abc").unwrap();
        assert_eq!(storage.get_item("token"), Some("abc".to_string()));

        storage.remove_item("token").unwrap();
        storage.remove_item("token").unwrap();
        assert_eq!(storage.get_item("token"), None);
    }

    #[test]
    fn test_file_storage_persists_across_instances() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let first = FileStorage::new(&path);
        first.set_item("token", "abc").unwrap();
        first.set_item("user", r#"{"name":"Ada"}"#).unwrap();

        let second = FileStorage::new(&path);
        assert_eq!(second.get_item("token"), Some("abc".to_string()));
        assert_eq!(second.get_item("user"), Some(r#"{"name":"Ada"}"#.to_string()));

        second.remove_item("token").unwrap();
        assert_eq!(first.get_item("token"), None);
    }

    #[test]
    fn test_file_storage_malformed_reads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let storage = FileStorage::new(&path);
        assert_eq!(storage.get_item("token"), None);

        storage.set_item("token", "fresh").unwrap();
        assert_eq!(storage.get_item("token"), Some("fresh".to_string()));
    }
}
