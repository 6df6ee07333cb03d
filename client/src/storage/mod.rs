//! Client-local persisted storage.
//!
//! A small write-through key-value store modeled after browser local
//! storage: a flat map of string slots serialized as one JSON object on
//! disk. Last writer wins; a single active process is assumed and no file
//! locking is performed. Storage faults are logged and absorbed so that a
//! broken store never blocks the UI.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Well-known storage slots shared across the application.
pub mod slots {
    /// Opaque session credential.
    pub const TOKEN: &str = "token";
    /// JSON-serialized user profile.
    pub const USER_INFO: &str = "userInfo";
    /// Active theme key.
    pub const THEME: &str = "theme";
}

struct StoreInner {
    path: Option<PathBuf>,
    entries: RwLock<HashMap<String, String>>,
}

/// Persisted key-value store. Cloning yields another handle to the same
/// underlying map, so the session helper and the theme manager can share
/// one store.
#[derive(Clone)]
pub struct LocalStore {
    inner: Arc<StoreInner>,
}

impl LocalStore {
    /// Open a store backed by the given file. A missing or malformed file
    /// is treated as an empty store.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<HashMap<String, String>>(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    log::warn!(
                        "store file '{}' is malformed, starting empty: {e}",
                        path.display()
                    );
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Self {
            inner: Arc::new(StoreInner {
                path: Some(path),
                entries: RwLock::new(entries),
            }),
        }
    }

    /// Open the store at the default per-user location.
    pub fn open_default() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::open(base.join("pulseboard").join("store.json"))
    }

    /// Create an ephemeral store with no backing file.
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(StoreInner {
                path: None,
                entries: RwLock::new(HashMap::new()),
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match self.inner.entries.read() {
            Ok(entries) => entries.get(key).cloned(),
            Err(_) => {
                log::warn!("store lock poisoned while reading '{key}'");
                None
            }
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn set(&self, key: &str, value: impl Into<String>) {
        self.mutate(|entries| {
            entries.insert(key.to_string(), value.into());
        });
    }

    pub fn remove(&self, key: &str) {
        self.mutate(|entries| {
            entries.remove(key);
        });
    }

    /// Remove several slots in one flush, so related entries (token and
    /// profile, for instance) always disappear together.
    pub fn remove_many(&self, keys: &[&str]) {
        self.mutate(|entries| {
            for key in keys {
                entries.remove(*key);
            }
        });
    }

    fn mutate(&self, f: impl FnOnce(&mut HashMap<String, String>)) {
        let Ok(mut entries) = self.inner.entries.write() else {
            log::warn!("store lock poisoned, dropping write");
            return;
        };
        f(&mut entries);
        self.flush(&entries);
    }

    fn flush(&self, entries: &HashMap<String, String>) {
        let Some(path) = &self.inner.path else {
            return;
        };
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                log::warn!("failed to create store directory '{}': {e}", parent.display());
                return;
            }
        }
        match serde_json::to_string_pretty(entries) {
            Ok(raw) => {
                if let Err(e) = fs::write(path, raw) {
                    log::warn!("failed to persist store '{}': {e}", path.display());
                }
            }
            Err(e) => log::warn!("failed to serialize store: {e}"),
        }
    }
}
