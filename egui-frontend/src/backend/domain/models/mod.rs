//! Domain models for the chore tracker.

pub mod chore;
pub mod chore_type;
pub mod student;
