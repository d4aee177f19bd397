use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::{ConfigDirs, ConfigPathError};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("missing HOME environment variable")]
    MissingHomeDirectory,
    #[error("failed to read preferences: {path}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write preferences: {path}")]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to parse preferences")]
    Parse(#[from] serde_json::Error),
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// String key-value persistence for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
    fn remove(&mut self, key: &str) -> StorageResult<()>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &mut T {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

/// Volatile store, used for embedding and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Preferences kept as a flat JSON object on disk.
///
/// Every operation goes back to the file, so two stores pointed at the same
/// path observe each other's writes.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `$XDG_CONFIG_HOME/mine-ui/preferences.json`, or under `$HOME/.config`,
    /// unless `config.json` names another `preferences_path`.
    pub fn with_default_path() -> StorageResult<Self> {
        Self::from_config_dirs(&ConfigDirs::from_env())
    }

    pub(crate) fn from_config_dirs(dirs: &ConfigDirs) -> StorageResult<Self> {
        let path = dirs.preferences_path().map_err(|error| match error {
            ConfigPathError::MissingHomeDirectory => StorageError::MissingHomeDirectory,
        })?;
        Ok(Self::with_path(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> StorageResult<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let serialized = fs::read_to_string(&self.path).map_err(|source| StorageError::Read {
            path: self.path.clone(),
            source,
        })?;
        if serialized.trim().is_empty() {
            return Ok(Map::new());
        }
        Ok(serde_json::from_str(&serialized)?)
    }

    fn save(&self, entries: &Map<String, Value>) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        let serialized = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, serialized).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

impl PreferenceStore for FileStore {
    /// Entries that are not JSON strings read as absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self
            .load()?
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        // A corrupt file is replaced; I/O failures leave it untouched.
        let mut entries = match self.load() {
            Ok(entries) => entries,
            Err(StorageError::Parse(err)) => {
                tracing::warn!(?err, path = ?self.path, "discarding unparsable preferences");
                Map::new()
            }
            Err(err) => return Err(err),
        };
        entries.insert(key.to_string(), Value::String(value.to_string()));
        self.save(&entries)
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        if !self.path.exists() {
            return Ok(());
        }
        let mut entries = self.load()?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.save(&entries)
    }
}
