//! In-memory store backend.

use std::collections::HashMap;
use std::sync::Mutex;

use super::{Store, StoreError};

/// A store backed by a plain in-process map.
///
/// Used by tests and anywhere persistence across runs is not wanted. Each
/// instance is fully isolated, so tests never share state.
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned lock only means a panic mid-write elsewhere; the map
        // itself is still usable.
        self.map
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Store for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock().get(key).cloned())
    }

    fn put_raw(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.lock().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get_raw("k").unwrap().is_none());

        store.put_raw("k", "v1").unwrap();
        assert_eq!(store.get_raw("k").unwrap().as_deref(), Some("v1"));

        store.put_raw("k", "v2").unwrap();
        assert_eq!(store.get_raw("k").unwrap().as_deref(), Some("v2"));

        store.remove("k").unwrap();
        assert!(store.get_raw("k").unwrap().is_none());
    }

    #[test]
    fn test_instances_are_isolated() {
        let a = MemoryStore::new();
        let b = MemoryStore::new();
        a.put_raw("k", "v").unwrap();
        assert!(b.get_raw("k").unwrap().is_none());
    }
}
