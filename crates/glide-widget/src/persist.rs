//! Persisted widget state: key names, loading, and writing.
//!
//! Each piece of state lives under its own store key as a small JSON
//! value. Loading is forgiving: a malformed value is dropped with a
//! warning and the widget falls back to its default for that piece, so
//! one corrupt entry never discards the rest.

use glide_chat::Message;
use glide_common::{Point, Size};
use glide_platform::StateStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// Store keys for persisted widget state.
pub mod keys {
    pub const IS_OPEN: &str = "chat-is-open";
    pub const MINIMIZED: &str = "chat-minimized";
    pub const MAXIMIZED: &str = "chat-maximized";
    pub const POSITION: &str = "chat-position";
    pub const SIZE: &str = "chat-size";
    pub const MESSAGES: &str = "chat-messages";
    pub const HISTORY: &str = "chat-history";
}

/// Everything the widget remembers across sessions. Each field is
/// `None` when its key is absent or failed to decode.
#[derive(Debug, Default)]
pub struct PersistedState {
    pub is_open: Option<bool>,
    pub minimized: Option<bool>,
    pub maximized: Option<bool>,
    pub position: Option<Point>,
    pub size: Option<Size>,
    pub messages: Option<Vec<Message>>,
    pub history: Option<Vec<String>>,
}

impl PersistedState {
    /// Load all keys from the store.
    pub fn load(store: &dyn StateStore) -> Self {
        Self {
            is_open: read_key(store, keys::IS_OPEN),
            minimized: read_key(store, keys::MINIMIZED),
            maximized: read_key(store, keys::MAXIMIZED),
            position: read_key(store, keys::POSITION),
            size: read_key(store, keys::SIZE),
            messages: read_key(store, keys::MESSAGES),
            history: read_key(store, keys::HISTORY),
        }
    }
}

/// Decode one key, dropping malformed values with a warning.
pub fn read_key<T: DeserializeOwned>(store: &dyn StateStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("dropping malformed persisted value for '{key}': {e}");
            None
        }
    }
}

/// Encode and store one key.
pub fn write_key<T: Serialize>(store: &mut dyn StateStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => store.set(key, json),
        Err(e) => warn!("could not serialize persisted value for '{key}': {e}"),
    }
}
