//! Key/value persistence port
//!
//! Mirrors a browser-local store: string keys, string values, explicit
//! removal. Malformed stored JSON is treated as absent, never as an error,
//! so a corrupted snapshot degrades to a clean start.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Storage keys the engine owns.
pub mod keys {
    /// Current criteria-row snapshot.
    pub const SELECTED_FIELDS: &str = "selectedFields";
    /// Pre-rename snapshot key, still cleared alongside the current one.
    pub const LEGACY_SAVED_SEARCH_FIELDS: &str = "savedSearchFields";
    /// System-type multi-select snapshot.
    pub const SELECTED_SYSTEM_TYPE_VALUES: &str = "selectedSystemTypeValues";
    /// Expanded/collapsed accordion panels plus the selected field marker.
    pub const SAVED_ACCORDION_STATE: &str = "savedAccordionState";
    /// Saved-group payload awaiting normalization.
    pub const SAVED_GROUP_FIELDS: &str = "savedGroupFields";
    /// Name of the saved search being edited.
    pub const SEARCH_NAME: &str = "searchName";
    /// Backend id of the saved search being edited.
    pub const SEARCH_NAME_ID: &str = "searchNameId";
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("persistence backend unavailable: {reason}")]
    Unavailable { reason: String },
    #[error("failed to write key '{key}': {reason}")]
    WriteFailed { key: String, reason: String },
    #[error("failed to serialize value for key '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl PersistenceError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn write_failed(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::WriteFailed {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Stable code for log events.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => "PERSIST_UNAVAILABLE",
            Self::WriteFailed { .. } => "PERSIST_WRITE_FAILED",
            Self::Serialize { .. } => "PERSIST_SERIALIZE",
        }
    }
}

/// Host-implemented key/value store.
pub trait PersistencePort: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistenceError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), PersistenceError>;
    fn remove_item(&self, key: &str) -> Result<(), PersistenceError>;
}

/// Load and deserialize a stored JSON value. Absent and malformed entries
/// both yield `Ok(None)`.
pub fn load_json<T: DeserializeOwned>(
    store: &dyn PersistencePort,
    key: &str,
) -> Result<Option<T>, PersistenceError> {
    let Some(raw) = store.get_item(key)? else {
        return Ok(None);
    };
    Ok(serde_json::from_str(&raw).ok())
}

/// Serialize and store a value as JSON.
pub fn store_json<T: Serialize>(
    store: &dyn PersistencePort,
    key: &str,
    value: &T,
) -> Result<(), PersistenceError> {
    let raw = serde_json::to_string(value).map_err(|source| PersistenceError::Serialize {
        key: key.to_string(),
        source,
    })?;
    store.set_item(key, &raw)
}

/// Name of the saved search being edited, if any.
pub fn search_name(store: &dyn PersistencePort) -> Result<Option<String>, PersistenceError> {
    store.get_item(keys::SEARCH_NAME)
}

/// Backend id of the saved search being edited, if any.
pub fn search_name_id(store: &dyn PersistencePort) -> Result<Option<String>, PersistenceError> {
    store.get_item(keys::SEARCH_NAME_ID)
}

pub fn set_search_name(
    store: &dyn PersistencePort,
    name: &str,
    id: &str,
) -> Result<(), PersistenceError> {
    store.set_item(keys::SEARCH_NAME, name)?;
    store.set_item(keys::SEARCH_NAME_ID, id)
}

pub fn clear_search_name(store: &dyn PersistencePort) -> Result<(), PersistenceError> {
    store.remove_item(keys::SEARCH_NAME)?;
    store.remove_item(keys::SEARCH_NAME_ID)
}

/// In-memory store used by tests and headless hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys, for assertions.
    pub fn len(&self) -> usize {
        self.items.lock().expect("store lock").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PersistencePort for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.items.lock().expect("store lock").get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.items
            .lock()
            .expect("store lock")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), PersistenceError> {
        self.items.lock().expect("store lock").remove(key);
        Ok(())
    }
}
