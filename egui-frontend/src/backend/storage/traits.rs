//! # Storage Traits
//!
//! This module defines the storage abstraction traits that the domain
//! services are written against.

use anyhow::Result;
use shared::ChoreStatus;

use crate::backend::domain::models::chore::Chore;
use crate::backend::domain::models::chore_type::ChoreType;
use crate::backend::domain::models::student::Student;

/// Read-only access to the fixed roster
pub trait StudentStorage: Send + Sync {
    /// Retrieve a student by ID
    fn get_student(&self, student_id: &str) -> Result<Option<Student>>;

    /// List all students in roster order
    fn list_students(&self) -> Result<Vec<Student>>;
}

/// Append-only chore type catalog
pub trait ChoreTypeStorage: Send + Sync {
    /// Append a new chore type to the end of the catalog
    fn store_chore_type(&self, chore_type: &ChoreType) -> Result<()>;

    /// Retrieve a chore type by ID
    fn get_chore_type(&self, chore_type_id: &str) -> Result<Option<ChoreType>>;

    /// List chore types in catalog order
    fn list_chore_types(&self) -> Result<Vec<ChoreType>>;
}

/// Chore list storage
///
/// Chores are kept in insertion order; every listing preserves it.
pub trait ChoreStorage: Send + Sync {
    /// Append a new chore
    fn store_chore(&self, chore: &Chore) -> Result<()>;

    /// List all chores in insertion order
    fn list_chores(&self) -> Result<Vec<Chore>>;

    /// Set the status of a chore.
    /// Returns the updated chore, or None if no chore has this ID
    fn update_chore_status(&self, chore_id: u64, status: ChoreStatus) -> Result<Option<Chore>>;

    /// Delete a chore.
    /// Returns true if the chore was found and deleted, false otherwise
    fn delete_chore(&self, chore_id: u64) -> Result<bool>;
}
