//! `window.localStorage` as a [`KeyValueStore`].

use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::error::{Result, StorageError};
use crate::storage::KeyValueStore;

/// Handle to the page's LocalStorage.
pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    /// Open LocalStorage for the current window.
    pub fn open() -> Result<Self> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".into()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(js_message(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".into()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.storage.get_item(key).map_err(|e| backend(key, &e))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.storage.set_item(key, value).map_err(|e| {
            if js_name(&e).as_deref() == Some("QuotaExceededError") {
                StorageError::QuotaExceeded {
                    key: key.to_string(),
                    bytes: value.len(),
                }
            } else {
                backend(key, &e)
            }
        })
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.storage.remove_item(key).map_err(|e| backend(key, &e))
    }
}

fn backend(key: &str, err: &JsValue) -> StorageError {
    StorageError::Backend {
        key: key.to_string(),
        message: js_message(err),
    }
}

/// `name` property of a thrown DOMException.
fn js_name(err: &JsValue) -> Option<String> {
    js_sys::Reflect::get(err, &"name".into())
        .ok()
        .and_then(|v| v.as_string())
}

fn js_message(err: &JsValue) -> String {
    js_sys::Reflect::get(err, &"message".into())
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}
