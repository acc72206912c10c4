//! Error types for student-records.
//!
//! Absent or unreadable stored lists are not errors (they read as empty);
//! everything here is a failure that reaches the caller.

use thiserror::Error;

/// Failures raised by a [`KeyValueStore`](crate::storage::KeyValueStore) or
/// while encoding a list for it.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backing store could not be reached (private browsing, no window).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Writing would exceed the store's quota.
    #[error("storage quota exceeded writing '{key}' ({bytes} bytes)")]
    QuotaExceeded {
        /// Key being written.
        key: String,
        /// Size of the rejected value.
        bytes: usize,
    },

    /// The store rejected an operation for another reason.
    #[error("storage operation on '{key}' failed: {message}")]
    Backend {
        /// Key being accessed.
        key: String,
        /// Message reported by the store.
        message: String,
    },

    /// A list could not be encoded as JSON.
    #[error("failed to serialize '{key}': {source}")]
    Serialize {
        /// Key the list was destined for.
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures raised while moving records between the active and deleted lists.
#[derive(Error, Debug)]
pub enum RosterError {
    /// Index does not name a record in the given list.
    #[error("no record at index {index} in '{list}' ({len} records)")]
    NoSuchRecord {
        /// Storage key of the list.
        list: String,
        /// Requested position.
        index: usize,
        /// Number of records in the list.
        len: usize,
    },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type Result<T, E = StorageError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_message_names_key() {
        let err = StorageError::QuotaExceeded {
            key: "students".into(),
            bytes: 42,
        };
        assert_eq!(
            err.to_string(),
            "storage quota exceeded writing 'students' (42 bytes)"
        );
    }

    #[test]
    fn test_no_such_record_message() {
        let err = RosterError::NoSuchRecord {
            list: "deletedStudents".into(),
            index: 4,
            len: 2,
        };
        assert_eq!(
            err.to_string(),
            "no record at index 4 in 'deletedStudents' (2 records)"
        );
    }

    #[test]
    fn test_roster_error_wraps_storage() {
        let err: RosterError = StorageError::Unavailable("no window".into()).into();
        assert!(matches!(err, RosterError::Storage(_)));
        assert_eq!(err.to_string(), "storage unavailable: no window");
    }
}
