//! Preference Storage
//!
//! Key-value storage that survives page reloads. In a browser this is
//! `localStorage`; here it is either process memory or a JSON file in the
//! platform data directory.

use std::fs;
use std::path::{Path, PathBuf};

use ahash::AHashMap;

use crate::error::{Error, Result};
use crate::helpers::get_or_create_data_dir;

/// Persistent string key-value store
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-process store
///
/// `MemoryStore::unavailable()` rejects every call, like a browser with
/// storage disabled.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    values: AHashMap<String, String>,
    available: bool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            values: AHashMap::new(),
            available: true,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            values: AHashMap::new(),
            available: false,
        }
    }

    /// Store pre-seeded with one entry
    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }

    fn check(&self) -> Result<()> {
        if self.available {
            Ok(())
        } else {
            Err(Error::Storage {
                message: "storage disabled".to_string(),
            })
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.check()?;
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.check()?;
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a JSON object on disk
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// File name inside the data directory
    pub const FILE_NAME: &'static str = "preferences.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform data directory
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(get_or_create_data_dir()?.join(Self::FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<AHashMap<String, String>> {
        if !self.path.exists() {
            return Ok(AHashMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());
        let content = serde_json::to_string_pretty(&values)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
