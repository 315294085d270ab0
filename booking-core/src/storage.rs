//! Key-value persistence for the appointment collection and settings.
//!
//! Each entry holds one JSON document. The file-backed storage keeps an
//! entry as `<dir>/<key>.json`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::BookingResult;

/// Entry holding the serialized appointment collection.
pub const APPOINTMENTS_KEY: &str = "appointments";

/// Entry holding the selected locale code.
pub const LANG_KEY: &str = "lang";

pub trait Storage {
    /// Read an entry. `Ok(None)` when it has never been written.
    fn get(&self, key: &str) -> BookingResult<Option<String>>;

    /// Overwrite an entry.
    fn set(&mut self, key: &str, value: &str) -> BookingResult<()>;
}

/// Entries as JSON files in a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStorage { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> BookingResult<Option<String>> {
        let path = self.entry_path(key);

        if !path.exists() {
            return Ok(None);
        }

        Ok(Some(std::fs::read_to_string(&path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> BookingResult<()> {
        std::fs::create_dir_all(&self.dir)?;

        let path = self.entry_path(key);
        std::fs::write(&path, value)?;
        tracing::debug!(path = %path.display(), bytes = value.len(), "wrote storage entry");

        Ok(())
    }
}

/// Entries held in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> BookingResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> BookingResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_storage_missing_entry() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        assert_eq!(storage.get(APPOINTMENTS_KEY).unwrap(), None);
    }

    #[test]
    fn test_file_storage_creates_directory_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path().join("nested").join("booking"));

        storage.set(LANG_KEY, "\"en\"").unwrap();
        storage.set(LANG_KEY, "\"el\"").unwrap();

        assert!(storage.entry_path(LANG_KEY).ends_with("lang.json"));
        assert_eq!(storage.get(LANG_KEY).unwrap().as_deref(), Some("\"el\""));
    }

    #[test]
    fn test_memory_storage_counts_writes() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("x").unwrap(), None);

        storage.set("x", "1").unwrap();
        storage.set("x", "2").unwrap();

        assert_eq!(storage.get("x").unwrap().as_deref(), Some("2"));
        assert_eq!(storage.writes(), 2);
    }
}
