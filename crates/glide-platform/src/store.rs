//! Key-value state store backing widget persistence.
//!
//! The widget persists small JSON values (geometry, mode flags, the
//! message thread) under string keys. The trait keeps the widget
//! agnostic of where those values live: hosts plug in a file-backed
//! store, an in-memory one for tests, or nothing at all.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use glide_common::StoreError;
use tracing::{debug, warn};

use crate::paths;

/// Storage seam for persisted widget state.
///
/// Values are opaque JSON strings. Implementations must tolerate
/// concurrent widgets only if the host needs that; the widget itself
/// calls the store from a single task.
pub trait StateStore: Send {
    /// Fetch the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String);

    /// Remove the value stored under `key`.
    fn remove(&mut self, key: &str);
}

/// A store that remembers nothing. Used when persistence is disabled.
#[derive(Debug, Default)]
pub struct NullStore;

impl StateStore for NullStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, _key: &str, _value: String) {}

    fn remove(&mut self, _key: &str) {}
}

/// An in-memory store. State survives for the process lifetime only.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

/// A file-backed store keeping all keys in a single JSON document.
///
/// Every mutation rewrites the file (write-through). The document is a
/// flat string-to-string object; `BTreeMap` keeps the on-disk key order
/// stable across rewrites. Load and flush failures degrade to warnings
/// so a broken state file never takes the widget down.
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open a store at `path`, loading any existing document.
    ///
    /// A malformed document is discarded with a warning; the next
    /// mutation writes a fresh one.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<BTreeMap<String, String>>(&content) {
                Ok(values) => values,
                Err(e) => {
                    warn!("discarding malformed state file {}: {e}", path.display());
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };

        debug!(
            "opened state store at {} ({} keys)",
            path.display(),
            values.len()
        );
        Self { path, values }
    }

    /// Open a store at the platform default path (`data_dir()/state.json`).
    pub fn at_default_path() -> Result<Self, StoreError> {
        Ok(Self::open(paths::state_file()?))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!(
                    "could not create state directory {}: {e}",
                    parent.display()
                );
                return;
            }
        }

        let content = match serde_json::to_string_pretty(&self.values) {
            Ok(content) => content,
            Err(e) => {
                warn!("could not serialize state: {e}");
                return;
            }
        };

        let tmp_path = self.path.with_extension("json.tmp");
        match std::fs::write(&tmp_path, &content) {
            Ok(()) => {
                if let Err(e) = std::fs::rename(&tmp_path, &self.path) {
                    warn!("atomic rename failed ({e}), falling back to direct write");
                    let _ = std::fs::remove_file(&tmp_path);
                    if let Err(e) = std::fs::write(&self.path, &content) {
                        warn!("could not write state file {}: {e}", self.path.display());
                    }
                }
            }
            Err(e) => {
                warn!("temp file write failed ({e}), falling back to direct write");
                if let Err(e) = std::fs::write(&self.path, &content) {
                    warn!("could not write state file {}: {e}", self.path.display());
                }
            }
        }
    }
}

impl StateStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
        self.flush();
    }

    fn remove(&mut self, key: &str) {
        if self.values.remove(key).is_some() {
            self.flush();
        }
    }
}
