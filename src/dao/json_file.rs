//! Key-value store backends: one JSON file on disk, and an in-memory map for
//! tests and demos.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::info;

use crate::config::StoreConfig;

use super::storage::{KeyValueStore, StorageError, StorageResult};

/// A [`KeyValueStore`] persisted as a single JSON object file mapping keys to
/// payload strings.
///
/// Every `set` rewrites the whole file; entries are kept sorted so the file
/// layout is deterministic.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at the configured path, loading any existing entries.
    /// A missing file is treated as an empty store; a corrupt or unreadable
    /// file is an error.
    pub fn open(config: &StoreConfig) -> StorageResult<Self> {
        let path = config.path.clone();
        let entries = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).map_err(|source| {
                StorageError::unavailable(
                    format!("corrupt store file {}", path.display()),
                    source,
                )
            })?,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "store file not found; starting empty");
                BTreeMap::new()
            }
            Err(source) => {
                return Err(StorageError::unavailable(
                    format!("failed to read store file {}", path.display()),
                    source,
                ));
            }
        };
        Ok(Self { path, entries })
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        let payload = serde_json::to_string_pretty(&self.entries).map_err(|source| {
            StorageError::unavailable("failed to serialize store entries".into(), source)
        })?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| {
                StorageError::unavailable(
                    format!("failed to create store directory {}", parent.display()),
                    source,
                )
            })?;
        }
        fs::write(&self.path, payload).map_err(|source| {
            StorageError::unavailable(
                format!("failed to write store file {}", self.path.display()),
                source,
            )
        })
    }
}

/// A [`KeyValueStore`] backed by a plain in-memory map. Nothing survives the
/// process; intended for tests and demos.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// An empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_config() -> StoreConfig {
        let path = env::temp_dir().join(format!("palette-studio-{}.json", uuid::Uuid::new_v4()));
        StoreConfig::at(path)
    }

    #[test]
    fn missing_file_opens_empty() {
        let config = temp_config();
        let store = JsonFileStore::open(&config).unwrap();
        assert_eq!(store.get("savedPalettes").unwrap(), None);
    }

    #[test]
    fn values_survive_reopen() {
        let config = temp_config();
        {
            let mut store = JsonFileStore::open(&config).unwrap();
            store.set("savedPalettes", "[]").unwrap();
            store.set("paletteCollections", "[{}]").unwrap();
        }
        let store = JsonFileStore::open(&config).unwrap();
        assert_eq!(store.get("savedPalettes").unwrap().as_deref(), Some("[]"));
        assert_eq!(
            store.get("paletteCollections").unwrap().as_deref(),
            Some("[{}]")
        );
        fs::remove_file(&config.path).unwrap();
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let config = temp_config();
        fs::write(&config.path, "not json").unwrap();
        assert!(JsonFileStore::open(&config).is_err());
        fs::remove_file(&config.path).unwrap();
    }

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
