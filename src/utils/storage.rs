// ============================================================================
// TOKEN STORAGE - Acceso al bearer token persistido
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use web_sys::{window, Storage};

use crate::errors::{js_message, ProfileError};

/// Capability over the persisted credential token.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn remove(&self) -> Result<(), ProfileError>;
}

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// `localStorage`-backed token store for a fixed key.
#[derive(Debug, Clone)]
pub struct LocalTokenStore {
    key: String,
}

impl LocalTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl TokenStore for LocalTokenStore {
    fn get(&self) -> Option<String> {
        let storage = get_local_storage()?;
        storage.get_item(&self.key).ok()?
    }

    fn remove(&self) -> Result<(), ProfileError> {
        let storage = get_local_storage()
            .ok_or_else(|| ProfileError::Storage("localStorage no disponible".to_string()))?;
        storage
            .remove_item(&self.key)
            .map_err(|e| ProfileError::Storage(js_message(&e)))
    }
}

/// In-memory token store. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    token: Rc<RefCell<Option<String>>>,
    fail_remove: Rc<Cell<bool>>,
    reads: Rc<Cell<usize>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        *store.token.borrow_mut() = Some(token.to_string());
        store
    }

    /// Make every subsequent `remove` fail (the token stays in place).
    pub fn fail_on_remove(&self) {
        self.fail_remove.set(true);
    }

    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    /// How many times `get` has been called.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.reads.set(self.reads.get() + 1);
        self.token.borrow().clone()
    }

    fn remove(&self) -> Result<(), ProfileError> {
        if self.fail_remove.get() {
            return Err(ProfileError::Storage("remove rejected".to_string()));
        }
        self.token.borrow_mut().take();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryTokenStore::with_token("abc");
        assert_eq!(store.get().as_deref(), Some("abc"));
        store.remove().unwrap();
        assert_eq!(store.get(), None);
        assert_eq!(store.reads(), 2);
    }

    #[test]
    fn failing_remove_keeps_token() {
        let store = MemoryTokenStore::with_token("abc");
        store.fail_on_remove();
        assert!(matches!(store.remove(), Err(ProfileError::Storage(_))));
        assert_eq!(store.token().as_deref(), Some("abc"));
    }

    #[test]
    fn clones_share_slot() {
        let store = MemoryTokenStore::with_token("abc");
        let other = store.clone();
        other.remove().unwrap();
        assert_eq!(store.token(), None);
    }
}
