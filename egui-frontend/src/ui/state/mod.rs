//! # State Module
//!
//! Focused state structs that together make up `ChoreTrackerApp`.
//!
//! - `app_state` - backend handle and navigation (view, current student)
//! - `assignment_state` - the parent's "Assign a New Mission" form
//! - `ui_state` - user feedback messages

pub mod app_state;
pub mod assignment_state;
pub mod ui_state;

pub use app_state::CoreAppState;
pub use assignment_state::AssignmentState;
pub use ui_state::UIState;
