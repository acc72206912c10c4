//! Student list persistence
//!
//! Two independent lists live in the store, each as one JSON array:
//! - active records under `students`
//! - soft-deleted records under `deletedStudents`
//!
//! Every read parses the whole document and every write replaces it. A list
//! that is missing, `null`, or unparsable reads as empty; store and encoding
//! failures are returned to the caller untouched.

use std::marker::PhantomData;

use serde::{Serialize, de::DeserializeOwned};

use crate::config::AppConfig;
use crate::consts::{DELETED_STUDENTS_KEY, STUDENTS_KEY};
use crate::error::{Result, StorageError};
use crate::storage::KeyValueStore;

/// Reads and writes the student lists through a store handle.
///
/// `T` is the record type; the service never looks inside it.
pub struct StudentService<S, T = serde_json::Value> {
    store: S,
    students_key: String,
    deleted_key: String,
    _record: PhantomData<fn() -> T>,
}

impl<S: KeyValueStore, T: Serialize + DeserializeOwned> StudentService<S, T> {
    /// Service using the standard `students` / `deletedStudents` keys.
    pub fn new(store: S) -> Self {
        Self::with_keys(store, STUDENTS_KEY, DELETED_STUDENTS_KEY)
    }

    /// Service using the keys from `config`.
    pub fn from_config(store: S, config: &AppConfig) -> Self {
        Self::with_keys(store, &config.students_key, &config.deleted_students_key)
    }

    pub fn with_keys(store: S, students_key: &str, deleted_key: &str) -> Self {
        Self {
            store,
            students_key: students_key.to_string(),
            deleted_key: deleted_key.to_string(),
            _record: PhantomData,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn students_key(&self) -> &str {
        &self.students_key
    }

    pub fn deleted_key(&self) -> &str {
        &self.deleted_key
    }

    pub fn get_students(&self) -> Result<Vec<T>> {
        self.load_list(&self.students_key)
    }

    pub fn save_students(&self, students: &[T]) -> Result<()> {
        self.save_list(&self.students_key, students)
    }

    pub fn get_deleted_students(&self) -> Result<Vec<T>> {
        self.load_list(&self.deleted_key)
    }

    pub fn save_deleted_students(&self, deleted: &[T]) -> Result<()> {
        self.save_list(&self.deleted_key, deleted)
    }

    fn load_list(&self, key: &str) -> Result<Vec<T>> {
        let Some(json) = self.store.get_item(key)? else {
            log::debug!("No '{}' in storage, starting empty", key);
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Option<Vec<T>>>(&json) {
            Ok(Some(list)) => {
                log::debug!("Loaded {} records from '{}'", list.len(), key);
                Ok(list)
            }
            Ok(None) => Ok(Vec::new()),
            Err(e) => {
                log::warn!("Unreadable '{}' in storage, treating as empty: {}", key, e);
                Ok(Vec::new())
            }
        }
    }

    fn save_list(&self, key: &str, list: &[T]) -> Result<()> {
        let json = serde_json::to_string(list).map_err(|source| StorageError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.store.set_item(key, &json)?;
        log::debug!("Saved {} records to '{}'", list.len(), key);
        Ok(())
    }
}
