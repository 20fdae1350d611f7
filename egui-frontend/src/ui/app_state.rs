//! # App State Module
//!
//! The central state store of the chore tracker.
//!
//! ## Key Types:
//! - `ChoreTrackerApp` - owns the backend, navigation, assignment form and
//!   feedback state
//!
//! ## Key Functions:
//! - `new()` - Initialize the app inside an eframe creation context
//! - `from_backend()` - Build the store around an existing backend
//!
//! The store operations themselves (assigning, status changes, deletes,
//! custom chore types, navigation) live in `components::chore_actions`.

use log::info;
use shared::{Student, View};

use crate::backend::Backend;
use crate::backend::domain::seed;
use crate::ui::state::{AssignmentState, CoreAppState, UIState};

/// Main application struct for the egui chore tracker
pub struct ChoreTrackerApp {
    pub core: CoreAppState,
    pub assignment: AssignmentState,
    pub ui: UIState,
}

impl ChoreTrackerApp {
    /// Create a new ChoreTrackerApp with the seed data loaded
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, anyhow::Error> {
        info!("🚀 Initializing ChoreTrackerApp");

        crate::ui::setup_kid_friendly_style(&cc.egui_ctx);

        let backend = Backend::new()?;
        Ok(Self::from_backend(backend))
    }

    /// Build the app around a backend without touching egui
    pub fn from_backend(backend: Backend) -> Self {
        Self {
            core: CoreAppState::new(backend),
            assignment: AssignmentState::new(seed::default_chore_type_id()),
            ui: UIState::new(),
        }
    }

    pub fn backend(&self) -> &Backend {
        &self.core.backend
    }

    pub fn current_view(&self) -> View {
        self.core.current_view
    }

    pub fn current_student(&self) -> Option<&Student> {
        self.core.current_student.as_ref()
    }

    /// Clear any error messages
    pub fn clear_messages(&mut self) {
        self.ui.clear_messages();
    }
}
