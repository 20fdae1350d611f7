//! # Memory Storage Module
//!
//! In-memory storage for the chore tracker. All lists live behind one shared
//! [`MemoryConnection`] and reset when the app closes.
//!
//! ## Repositories
//!
//! - `StudentRepository` - fixed roster, read only
//! - `ChoreTypeRepository` - append-only chore type catalog
//! - `ChoreRepository` - chore list with status updates and deletes

pub mod chore_repository;
pub mod chore_type_repository;
pub mod connection;
pub mod student_repository;

pub use chore_repository::ChoreRepository;
pub use chore_type_repository::ChoreTypeRepository;
pub use connection::MemoryConnection;
pub use student_repository::StudentRepository;
