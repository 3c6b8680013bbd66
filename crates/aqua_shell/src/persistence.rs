//! Session persistence adapters.
//!
//! The session store is an injected collaborator, not something the window
//! manager knows about: the runtime context saves a snapshot whenever the
//! command layer emits [`aqua_session::SessionEffect::PersistSession`] and
//! loads one at boot. The browser adapter keeps the whole window map under
//! a single localStorage key; the memory adapter backs tests and non-WASM
//! targets.

use std::cell::RefCell;

use aqua_session::{DecodedSnapshot, SessionSnapshot, SnapshotError};
use thiserror::Error;

/// Storage key for the persisted desktop session.
pub const SESSION_STORAGE_KEY: &str = "aquadesk.session.v1";

#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("browser localStorage is unavailable")]
    StorageUnavailable,
    #[error("storage write rejected for key `{key}`")]
    WriteRejected { key: &'static str },
    #[error("serialize session snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// Durable mirror for the desktop session.
pub trait SessionStore {
    /// Loads and leniently decodes the persisted session, `None` when no
    /// session has been saved yet.
    fn load(&self) -> Result<Option<DecodedSnapshot>, SessionStoreError>;
    /// Overwrites the persisted session.
    fn save(&self, snapshot: &SessionSnapshot) -> Result<(), SessionStoreError>;
    /// Removes the persisted session.
    fn clear(&self) -> Result<(), SessionStoreError>;
}

/// localStorage-backed store used in the browser. On non-WASM targets it
/// reports storage as unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageSessionStore;

impl SessionStore for LocalStorageSessionStore {
    fn load(&self) -> Result<Option<DecodedSnapshot>, SessionStoreError> {
        let storage = local_storage().ok_or(SessionStoreError::StorageUnavailable)?;
        let raw = storage
            .get_item(SESSION_STORAGE_KEY)
            .map_err(|_| SessionStoreError::StorageUnavailable)?;
        match raw {
            Some(raw) => Ok(Some(SessionSnapshot::decode_lenient(&raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, snapshot: &SessionSnapshot) -> Result<(), SessionStoreError> {
        let storage = local_storage().ok_or(SessionStoreError::StorageUnavailable)?;
        let raw = serde_json::to_string(snapshot)?;
        storage
            .set_item(SESSION_STORAGE_KEY, &raw)
            .map_err(|_| SessionStoreError::WriteRejected {
                key: SESSION_STORAGE_KEY,
            })
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        let storage = local_storage().ok_or(SessionStoreError::StorageUnavailable)?;
        storage
            .remove_item(SESSION_STORAGE_KEY)
            .map_err(|_| SessionStoreError::WriteRejected {
                key: SESSION_STORAGE_KEY,
            })
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(not(target_arch = "wasm32"))]
fn local_storage() -> Option<web_sys::Storage> {
    None
}

/// In-memory store holding the raw serialized payload, so tests exercise
/// the same encode/decode path the browser adapter does.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    raw: RefCell<Option<String>>,
}

impl MemorySessionStore {
    /// Seeds the store with an arbitrary raw payload, valid or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: RefCell::new(Some(raw.into())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<DecodedSnapshot>, SessionStoreError> {
        match self.raw.borrow().as_deref() {
            Some(raw) => Ok(Some(SessionSnapshot::decode_lenient(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, snapshot: &SessionSnapshot) -> Result<(), SessionStoreError> {
        *self.raw.borrow_mut() = Some(serde_json::to_string(snapshot)?);
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        *self.raw.borrow_mut() = None;
        Ok(())
    }
}
