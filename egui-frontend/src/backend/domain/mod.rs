//! # Domain Module
//!
//! Business logic for the chore tracker, independent of egui.
//!
//! ## Module Organization
//!
//! - **student_service**: lookups over the fixed roster
//! - **chore_type_service**: the chore type catalog and custom type creation
//! - **chore_service**: assigning chores, status changes, deletes and the
//!   derived lists the views render (per-kid, needs approval, active)
//! - **seed**: the starting roster, catalog and chores
//! - **id_generator**: timestamp-based IDs that never repeat within a session
//!
//! ## Business Rules
//!
//! - Invalid requests (unknown IDs, blank labels, no selected template) are
//!   no-ops, not errors; results report whether anything changed
//! - Any status may be set on any chore
//! - Chore labels are copied from their chore type at assignment time
//! - Chore types are append-only

pub mod chore_service;
pub mod chore_type_service;
pub mod commands;
pub mod id_generator;
pub mod models;
pub mod seed;
pub mod student_service;

pub use chore_service::ChoreService;
pub use chore_type_service::ChoreTypeService;
pub use id_generator::TimestampIdGenerator;
pub use student_service::StudentService;
