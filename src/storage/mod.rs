//! Key-value store handles
//!
//! Every persisted list goes through a [`KeyValueStore`] handle owned by the
//! caller. The browser build wraps LocalStorage
//! ([`platform::LocalStore`](crate::platform)); native builds and tests use
//! [`MemoryStore`].

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{Result, StorageError};

/// String key-value store with LocalStorage semantics.
pub trait KeyValueStore {
    /// Value stored under `key`, or `None` if nothing is stored.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}

/// In-memory store.
///
/// An optional quota caps the total bytes of keys plus values, mirroring the
/// browser's per-origin LocalStorage limit.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that rejects writes once keys plus values exceed `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            items: RefCell::new(HashMap::new()),
            quota: Some(bytes),
        }
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Bytes currently used by keys and values.
    pub fn used_bytes(&self) -> usize {
        self.items
            .borrow()
            .iter()
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if let Some(quota) = self.quota {
            let replaced = self
                .items
                .borrow()
                .get(key)
                .map(|old| key.len() + old.len())
                .unwrap_or(0);
            let after = self.used_bytes() - replaced + key.len() + value.len();
            if after > quota {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    bytes: value.len(),
                });
            }
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get_item("students").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_replaces_value() {
        let store = MemoryStore::new();
        store.set_item("k", "one").unwrap();
        store.set_item("k", "two").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("two"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let store = MemoryStore::new();
        store.remove_item("nope").unwrap();
        store.set_item("k", "v").unwrap();
        store.remove_item("k").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_quota_rejects_and_keeps_old_value() {
        let store = MemoryStore::with_quota(10);
        store.set_item("k", "12345").unwrap();
        let err = store.set_item("k", "123456789012").unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { bytes: 12, .. }));
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("12345"));
    }

    #[test]
    fn test_quota_counts_replacement_not_sum() {
        // "k" + 9 bytes fits exactly; replacing it with another 9 must too
        let store = MemoryStore::with_quota(10);
        store.set_item("k", "aaaaaaaaa").unwrap();
        store.set_item("k", "bbbbbbbbb").unwrap();
        assert_eq!(store.used_bytes(), 10);
    }

    #[test]
    fn test_borrowed_store_shares_items() {
        let store = MemoryStore::new();
        let a = &store;
        let b = &store;
        a.set_item("k", "v").unwrap();
        assert_eq!(KeyValueStore::get_item(&b, "k").unwrap().as_deref(), Some("v"));
    }
}
