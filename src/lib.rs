//! Student Records - a small single-page app
//!
//! Core modules:
//! - `router`: Static path → view table with one lazily loaded view
//! - `persistence`: Active and archived student lists in LocalStorage
//! - `roster`: Soft delete / restore between the two lists
//! - `storage`: Key-value store handle passed to the persistence layer
//! - `platform`: Browser/native platform abstraction
//! - `views`: Thin text rendering per view

pub mod app;
pub mod config;
pub mod error;
pub mod persistence;
pub mod platform;
pub mod roster;
pub mod router;
pub mod storage;
pub mod views;

pub use app::App;
pub use config::AppConfig;
pub use error::{RosterError, StorageError};
pub use persistence::StudentService;
pub use roster::Roster;
pub use router::{Route, Router};
pub use storage::{KeyValueStore, MemoryStore};
pub use views::ViewId;

/// App constants
pub mod consts {
    /// Storage key for active students
    pub const STUDENTS_KEY: &str = "students";
    /// Storage key for soft-deleted students
    pub const DELETED_STUDENTS_KEY: &str = "deletedStudents";
    /// Served from the site root unless `BASE_URL` says otherwise
    pub const DEFAULT_BASE_URL: &str = "/";
    /// Element the app renders into
    pub const MOUNT_ELEMENT_ID: &str = "app";
}
