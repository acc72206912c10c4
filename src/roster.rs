//! Moving students between the active and archived lists
//!
//! The persistence layer stores the two lists independently; the roster is
//! the caller that keeps them consistent for the students and archive views.
//! Each operation reads both documents it touches, edits them, and writes
//! them back whole, the list receiving the record first.

use serde::{Serialize, de::DeserializeOwned};

use crate::error::RosterError;
use crate::persistence::StudentService;
use crate::storage::KeyValueStore;
use crate::views::Counts;

pub struct Roster<S, T = serde_json::Value> {
    service: StudentService<S, T>,
}

impl<S: KeyValueStore, T: Serialize + DeserializeOwned> Roster<S, T> {
    pub fn new(service: StudentService<S, T>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &StudentService<S, T> {
        &self.service
    }

    pub fn students(&self) -> Result<Vec<T>, RosterError> {
        Ok(self.service.get_students()?)
    }

    pub fn archived(&self) -> Result<Vec<T>, RosterError> {
        Ok(self.service.get_deleted_students()?)
    }

    pub fn counts(&self) -> Result<Counts, RosterError> {
        Ok(Counts {
            active: self.service.get_students()?.len(),
            deleted: self.service.get_deleted_students()?.len(),
        })
    }

    /// Append a new student to the active list.
    pub fn add(&self, record: T) -> Result<(), RosterError> {
        let mut students = self.service.get_students()?;
        students.push(record);
        self.service.save_students(&students)?;
        log::info!("Added student ({} on roll)", students.len());
        Ok(())
    }

    /// Soft delete: move the active student at `index` to the archive.
    pub fn archive(&self, index: usize) -> Result<(), RosterError> {
        let mut students = self.service.get_students()?;
        let mut archived = self.service.get_deleted_students()?;
        let record = take(&mut students, index, self.service.students_key())?;
        archived.push(record);

        // Receiving list first.
        self.service.save_deleted_students(&archived)?;
        self.service.save_students(&students)?;
        log::info!("Archived student {}", index);
        Ok(())
    }

    /// Move the archived student at `index` back to the active list.
    pub fn restore(&self, index: usize) -> Result<(), RosterError> {
        let mut students = self.service.get_students()?;
        let mut archived = self.service.get_deleted_students()?;
        let record = take(&mut archived, index, self.service.deleted_key())?;
        students.push(record);

        self.service.save_students(&students)?;
        self.service.save_deleted_students(&archived)?;
        log::info!("Restored archived student {}", index);
        Ok(())
    }

    /// Permanently drop the archived student at `index`.
    pub fn purge(&self, index: usize) -> Result<T, RosterError> {
        let mut archived = self.service.get_deleted_students()?;
        let record = take(&mut archived, index, self.service.deleted_key())?;
        self.service.save_deleted_students(&archived)?;
        log::info!("Purged archived student {}", index);
        Ok(record)
    }

    /// Permanently drop every archived student.
    pub fn clear_archive(&self) -> Result<usize, RosterError> {
        let count = self.service.get_deleted_students()?.len();
        self.service.save_deleted_students(&[])?;
        log::info!("Cleared archive ({} students)", count);
        Ok(count)
    }
}

fn take<T>(list: &mut Vec<T>, index: usize, key: &str) -> Result<T, RosterError> {
    if index >= list.len() {
        return Err(RosterError::NoSuchRecord {
            list: key.to_string(),
            index,
            len: list.len(),
        });
    }
    Ok(list.remove(index))
}
