//! Durable key/value storage for the client session.
//!
//! The session is a pair of entries: `user` (JSON-encoded [`User`]) and
//! `token`. They are always written together and removed together.

use std::collections::{BTreeMap, HashMap};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use stayhub_core::user::User;

use crate::config::ClientConfig;
use crate::error::StorageError;

pub const USER_KEY: &str = "user";
pub const TOKEN_KEY: &str = "token";

/// String key/value store that survives restarts.
///
/// `set_many` and `remove_many` default to one call per key; stores that
/// can apply a batch in one step should override them.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;

    fn set_many(&self, entries: &[(&str, &str)]) -> Result<(), StorageError> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }

    fn remove_many(&self, keys: &[&str]) -> Result<(), StorageError> {
        for key in keys {
            self.remove(key)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// Process-local store. Used in tests and when no session file is wanted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }

    fn set_many(&self, pairs: &[(&str, &str)]) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        for (key, value) in pairs {
            entries.insert((*key).to_string(), (*value).to_string());
        }
        Ok(())
    }

    fn remove_many(&self, keys: &[&str]) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        for key in keys {
            entries.remove(*key);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// File-backed store
// ---------------------------------------------------------------------------

/// Store backed by a single JSON object on disk.
///
/// Every write rewrites the whole file through a temporary sibling and an
/// atomic rename, so a batch either lands completely or not at all. A
/// missing file reads as empty.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Store backed by the configured session file.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.session_file.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        let content = serde_json::to_string_pretty(entries)?;
        {
            let mut tmp = File::create(&tmp_path)?;
            tmp.write_all(content.as_bytes())?;
            tmp.sync_all()?;
        }
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    fn update<F>(&self, mutate: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.load()?;
        mutate(&mut entries);
        self.save(&entries)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.set_many(&[(key, value)])
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.remove_many(&[key])
    }

    fn set_many(&self, pairs: &[(&str, &str)]) -> Result<(), StorageError> {
        self.update(|entries| {
            for (key, value) in pairs {
                entries.insert((*key).to_string(), (*value).to_string());
            }
        })
    }

    fn remove_many(&self, keys: &[&str]) -> Result<(), StorageError> {
        self.update(|entries| {
            for key in keys {
                entries.remove(*key);
            }
        })
    }
}

// ---------------------------------------------------------------------------
// Session pair helpers
// ---------------------------------------------------------------------------

/// Persist the session pair in one batch.
pub fn save_session(
    store: &dyn KeyValueStore,
    user: &User,
    token: &str,
) -> Result<(), StorageError> {
    let user_json = serde_json::to_string(user)?;
    store.set_many(&[(USER_KEY, user_json.as_str()), (TOKEN_KEY, token)])
}

/// Remove both halves of the session pair.
pub fn clear_session(store: &dyn KeyValueStore) -> Result<(), StorageError> {
    store.remove_many(&[USER_KEY, TOKEN_KEY])
}

/// Load the persisted session.
///
/// Returns `None` unless both entries are present. A `user` entry that
/// does not decode is treated as absent.
pub fn load_session(store: &dyn KeyValueStore) -> Result<Option<(User, String)>, StorageError> {
    let (Some(user_json), Some(token)) = (store.get(USER_KEY)?, store.get(TOKEN_KEY)?) else {
        return Ok(None);
    };

    match serde_json::from_str::<User>(&user_json) {
        Ok(user) => Ok(Some((user, token))),
        Err(e) => {
            tracing::warn!(error = %e, "Discarding undecodable stored user");
            Ok(None)
        }
    }
}
