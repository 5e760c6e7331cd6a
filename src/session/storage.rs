use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock},
};

use crate::errors::StorageError;

/// Key/value medium backing a session, in the manner of browser local storage.
///
/// Reads never fail. A write that returns an error has not taken effect.
pub trait TokenStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }
}

/// Session entries kept as a JSON object in a file, so they survive restarts.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileStorage {
    /// Opens the file at `path`. A missing or unreadable file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::load(&path);
        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> HashMap<String, String> {
        let raw = match fs::read(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return HashMap::new(),
            Err(e) => {
                log::warn!("Could not read session file {}: {}", path.display(), e);
                return HashMap::new();
            }
        };

        serde_json::from_slice(&raw).unwrap_or_else(|e| {
            log::warn!("Ignoring corrupt session file {}: {}", path.display(), e);
            HashMap::new()
        })
    }

    /// Writes the current entries to disk.
    pub fn flush(&self) -> Result<(), StorageError> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let raw = serde_json::to_vec_pretty(&*entries)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, raw)?;
        Ok(())
    }

    /// Flushes after `key` changed, putting `previous` back if the file
    /// could not be written.
    fn flush_or_restore(&self, key: &str, previous: Option<String>) -> Result<(), StorageError> {
        let Err(e) = self.flush() else {
            return Ok(());
        };

        log::warn!("Session change not persisted to {}: {}", self.path.display(), e);
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        match previous {
            Some(value) => entries.insert(key.to_string(), value),
            None => entries.remove(key),
        };
        Err(e)
    }
}

impl TokenStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let previous = {
            let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
            entries.insert(key.to_string(), value.to_string())
        };
        self.flush_or_restore(key, previous)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let previous = {
            let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
            entries.remove(key)
        };
        match previous {
            Some(value) => self.flush_or_restore(key, Some(value)),
            None => Ok(()),
        }
    }
}
