//! Persisted client-side key/value storage holding the auth token.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, RwLock};

use serde_json::{Map, Value as JsonValue};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Storage key the auth token lives under.
pub const TOKEN_KEY: &str = "token";

pub trait TokenStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;

    fn token(&self) -> Result<Option<String>> {
        self.get(TOKEN_KEY)
    }
}

/// A JSON object on disk, read on every lookup so external writes are seen.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<Map<String, JsonValue>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<JsonValue>(&raw)? {
            JsonValue::Object(map) => Ok(map),
            other => {
                warn!(path = %self.path.display(), "Storage file is not a JSON object: {}", other);
                Err(Error::Storage(format!(
                    "{} does not contain a JSON object",
                    self.path.display()
                )))
            }
        }
    }

    fn write_map(&self, map: &Map<String, JsonValue>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec_pretty(map)?)?;
        Ok(())
    }

    fn update<F>(&self, apply: F) -> Result<()>
    where
        F: FnOnce(&mut Map<String, JsonValue>),
    {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| Error::Storage("storage write lock poisoned".to_string()))?;
        let mut map = self.read_map()?;
        apply(&mut map);
        self.write_map(&map)
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let map = self.read_map()?;
        Ok(map.get(key).and_then(|v| match v {
            JsonValue::String(s) => Some(s.clone()),
            JsonValue::Null => None,
            other => Some(other.to_string()),
        }))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        debug!(key, path = %self.path.display(), "Writing storage key");
        self.update(|map| {
            map.insert(key.to_string(), JsonValue::String(value.to_string()));
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        debug!(key, path = %self.path.display(), "Removing storage key");
        self.update(|map| {
            map.remove(key);
        })
    }
}

#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.write() {
            entries.insert(TOKEN_KEY.to_string(), token.to_string());
        }
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| Error::Storage("memory store lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| Error::Storage("memory store lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| Error::Storage("memory store lock poisoned".to_string()))?;
        entries.remove(key);
        Ok(())
    }
}
