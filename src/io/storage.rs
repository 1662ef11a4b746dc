// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Local key-value persistence.
//!
//! This module provides the string-keyed, string-valued store that the
//! project collection and the login flag are written to. Values are opaque
//! to the store; callers own the encoding.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Key holding the JSON-encoded project collection.
pub const PROJECTS_KEY: &str = "portfolio_projects";

/// Key holding the literal `"true"` while the operator is signed in.
pub const AUTH_KEY: &str = "auth_status";

/// Default storage budget, matching what browsers grant a single origin.
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage quota exceeded: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded { needed: usize, quota: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Abstract get/set/remove interface over string values.
///
/// All methods take `&self`; implementations use interior mutability since
/// the application is single-threaded.
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    /// A failed write leaves the previous value in place.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a value. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Directory-backed store: one file per key.
pub struct FileStore {
    root: PathBuf,
    quota_bytes: usize,
}

impl FileStore {
    /// Open (and create if needed) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>, quota_bytes: usize) -> Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root, quota_bytes })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
            .collect();
        self.root.join(format!("{safe}.json"))
    }

    /// Bytes used by every key except `skip`.
    fn used_bytes_excluding(&self, skip: &Path) -> Result<usize> {
        let mut total = 0usize;
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            let path = entry.path();
            if path == skip || path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            total += entry.metadata()?.len() as usize;
        }
        Ok(total)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let needed = self.used_bytes_excluding(&path)? + value.len();
        if needed > self.quota_bytes {
            return Err(StorageError::QuotaExceeded {
                needed,
                quota: self.quota_bytes,
            });
        }

        // Temp file + rename: the previous value survives a failed write.
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store. Backs the app when no data directory is usable, and tests.
#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
    quota_bytes: Option<usize>,
    simulate_write_error: RefCell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that refuses writes pushing the total above `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            quota_bytes: Some(quota_bytes),
            ..Self::default()
        }
    }

    /// Make every subsequent `set` fail with an IO error.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(std::io::Error::other("simulated write failure").into());
        }
        if let Some(quota) = self.quota_bytes {
            let others: usize = self
                .values
                .borrow()
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(_, v)| v.len())
                .sum();
            let needed = others + value.len();
            if needed > quota {
                return Err(StorageError::QuotaExceeded { needed, quota });
            }
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_get_set_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));

        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);

        // Removing twice is fine
        store.remove("k").unwrap();
    }

    #[test]
    fn test_memory_store_quota_keeps_previous_value() {
        let store = MemoryStore::with_quota(8);
        store.set("k", "1234").unwrap();

        let err = store.set("k", "123456789").unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { needed: 9, quota: 8 }));
        assert_eq!(store.get("k").unwrap().as_deref(), Some("1234"));
    }

    #[test]
    fn test_memory_store_simulated_failure() {
        let store = MemoryStore::new();
        store.set_simulate_write_error(true);
        assert!(matches!(store.set("k", "v"), Err(StorageError::Io(_))));
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("data"), DEFAULT_QUOTA_BYTES).unwrap();

        assert_eq!(store.get(PROJECTS_KEY).unwrap(), None);
        store.set(PROJECTS_KEY, "[]").unwrap();
        store.set(AUTH_KEY, "true").unwrap();
        assert_eq!(store.get(PROJECTS_KEY).unwrap().as_deref(), Some("[]"));

        // A second handle on the same directory sees the values
        let reopened = FileStore::open(store.root(), DEFAULT_QUOTA_BYTES).unwrap();
        assert_eq!(reopened.get(AUTH_KEY).unwrap().as_deref(), Some("true"));

        reopened.remove(AUTH_KEY).unwrap();
        assert_eq!(store.get(AUTH_KEY).unwrap(), None);
    }

    #[test]
    fn test_file_store_quota_counts_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path(), 10).unwrap();

        store.set("a", "123456").unwrap();
        // Overwriting the same key only counts the new value
        store.set("a", "1234567").unwrap();

        let err = store.set("b", "12345").unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { needed: 12, quota: 10 }));
        assert_eq!(store.get("b").unwrap(), None);
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1234567"));
    }
}
