//! # Core Application State
//!
//! The backbone of the chore tracker: the backend handle plus the navigation
//! fields that pick which screen is showing.
//!
//! ## Responsibilities:
//! - Backend connection management
//! - Current view (landing, student, parent)
//! - Current student for the kid view

use shared::{Student, View};
use crate::backend::Backend;

/// Core application state containing essential app data
pub struct CoreAppState {
    /// Backend connection for data access
    pub backend: Backend,

    /// Screen currently showing
    pub current_view: View,

    /// Kid whose chores the student view shows
    pub current_student: Option<Student>,
}

impl CoreAppState {
    /// Create new core app state with backend connection
    pub fn new(backend: Backend) -> Self {
        Self {
            backend,
            current_view: View::Landing,
            current_student: None,
        }
    }
}
