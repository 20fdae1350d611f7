//! # Memory Connection
//!
//! Owns the three in-memory lists (students, chore types, chores). Each list
//! sits behind its own `RwLock` so a mutation swaps the list contents under a
//! single write guard and no half-applied change is ever visible.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::backend::domain::models::chore::Chore;
use crate::backend::domain::models::chore_type::ChoreType;
use crate::backend::domain::models::student::Student;

/// Errors raised by the in-memory store
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("{0} store lock is poisoned")]
    LockPoisoned(&'static str),
}

/// Shared handle to the in-memory lists
#[derive(Debug, Default)]
pub struct MemoryConnection {
    students: RwLock<Vec<Student>>,
    chore_types: RwLock<Vec<ChoreType>>,
    chores: RwLock<Vec<Chore>>,
}

impl MemoryConnection {
    /// Create a connection pre-loaded with the given lists
    pub fn with_data(students: Vec<Student>, chore_types: Vec<ChoreType>, chores: Vec<Chore>) -> Self {
        Self {
            students: RwLock::new(students),
            chore_types: RwLock::new(chore_types),
            chores: RwLock::new(chores),
        }
    }

    pub fn students(&self) -> Result<RwLockReadGuard<'_, Vec<Student>>, StorageError> {
        self.students.read().map_err(|_| StorageError::LockPoisoned("students"))
    }

    pub fn chore_types(&self) -> Result<RwLockReadGuard<'_, Vec<ChoreType>>, StorageError> {
        self.chore_types.read().map_err(|_| StorageError::LockPoisoned("chore types"))
    }

    pub fn chore_types_mut(&self) -> Result<RwLockWriteGuard<'_, Vec<ChoreType>>, StorageError> {
        self.chore_types.write().map_err(|_| StorageError::LockPoisoned("chore types"))
    }

    pub fn chores(&self) -> Result<RwLockReadGuard<'_, Vec<Chore>>, StorageError> {
        self.chores.read().map_err(|_| StorageError::LockPoisoned("chores"))
    }

    pub fn chores_mut(&self) -> Result<RwLockWriteGuard<'_, Vec<Chore>>, StorageError> {
        self.chores.write().map_err(|_| StorageError::LockPoisoned("chores"))
    }
}
