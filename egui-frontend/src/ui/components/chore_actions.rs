//! # Chore Actions Module
//!
//! The state store operations behind every button in the app. Views call
//! these methods; each one talks to the backend, updates navigation or form
//! state, and reports backend failures through `UIState`.
//!
//! ## Key Functions:
//! - `add_chore()` - Assign the selected chore type to a student
//! - `update_chore_status()` - Mark pending, approve or send back
//! - `delete_chore()` - Remove a chore
//! - `create_chore_type()` - Add a custom chore type and select it
//! - `show_landing()` / `show_parent()` / `show_student()` - Navigation
//!
//! Requests that make no sense (unknown IDs, blank labels, no selected
//! template) change nothing and return `None`/`false`.

use log::{error, info};
use shared::{Chore, ChoreStatus, ChoreType, IconKey, Student, View};

use crate::backend::domain::commands::chore::{AddChoreCommand, DeleteChoreCommand, UpdateChoreStatusCommand};
use crate::backend::domain::commands::chore_type::CreateChoreTypeCommand;
use crate::ui::app_state::ChoreTrackerApp;
use crate::ui::mappers::{chore_type_to_dto, student_to_dto, ChoreMapper};

impl ChoreTrackerApp {
    /// Record a backend failure for the message strip
    fn report_error(&mut self, context: &str, e: anyhow::Error) {
        error!("{}: {}", context, e);
        self.ui.set_error(format!("{}: {}", context, e));
    }

    // ---- Navigation ----

    pub fn show_landing(&mut self) {
        info!("🏠 Showing landing page");
        self.core.current_view = View::Landing;
    }

    pub fn show_parent(&mut self) {
        info!("🛡 Showing parent dashboard");
        self.core.current_view = View::Parent;
    }

    /// Switch to the kid view for a student. Unknown students are ignored.
    pub fn show_student(&mut self, student_id: &str) {
        match self.backend().student_service.get_student(student_id) {
            Ok(Some(student)) => {
                info!("🧒 Showing chores for {}", student.name);
                self.core.current_student = Some(student_to_dto(student));
                self.core.current_view = View::Student;
            }
            Ok(None) => {}
            Err(e) => self.report_error("Failed to load student", e),
        }
    }

    // ---- Chores ----

    /// Assign the currently selected chore type to a student
    pub fn add_chore(&mut self, student_id: &str) -> Option<Chore> {
        let command = AddChoreCommand {
            student_id: student_id.to_string(),
            chore_type_id: self.assignment.selected_chore_type.clone(),
        };
        match self.backend().chore_service.add_chore(command) {
            Ok(result) => result.chore.map(ChoreMapper::to_dto),
            Err(e) => {
                self.report_error("Failed to assign chore", e);
                None
            }
        }
    }

    /// Set a chore's status. Returns false when no chore has this ID.
    pub fn update_chore_status(&mut self, chore_id: u64, status: ChoreStatus) -> bool {
        let command = UpdateChoreStatusCommand { chore_id, status };
        match self.backend().chore_service.update_chore_status(command) {
            Ok(result) => result.chore.is_some(),
            Err(e) => {
                self.report_error("Failed to update chore", e);
                false
            }
        }
    }

    /// Delete a chore. Returns false when no chore has this ID.
    pub fn delete_chore(&mut self, chore_id: u64) -> bool {
        match self.backend().chore_service.delete_chore(DeleteChoreCommand { chore_id }) {
            Ok(result) => result.deleted,
            Err(e) => {
                self.report_error("Failed to delete chore", e);
                false
            }
        }
    }

    // ---- Chore types ----

    pub fn select_chore_type(&mut self, chore_type_id: &str) {
        self.assignment.selected_chore_type = Some(chore_type_id.to_string());
    }

    pub fn open_chore_type_form(&mut self) {
        self.assignment.chore_type_form.is_open = true;
    }

    /// Close the create form and throw the draft away
    pub fn cancel_chore_type_form(&mut self) {
        self.assignment.chore_type_form.reset();
    }

    /// Create a custom chore type, select it and clear the draft form.
    /// A blank label changes nothing.
    pub fn create_chore_type(&mut self, label: &str, icon_key: IconKey) -> Option<ChoreType> {
        let command = CreateChoreTypeCommand {
            label: label.to_string(),
            icon_key,
        };
        match self.backend().chore_type_service.create_chore_type(command) {
            Ok(result) => {
                let chore_type = result.chore_type.map(chore_type_to_dto)?;
                self.assignment.selected_chore_type = Some(chore_type.id.clone());
                self.assignment.chore_type_form.reset();
                Some(chore_type)
            }
            Err(e) => {
                self.report_error("Failed to create chore type", e);
                None
            }
        }
    }

    /// Submit the draft in the create form
    pub fn submit_chore_type_form(&mut self) -> Option<ChoreType> {
        let label = self.assignment.chore_type_form.label.clone();
        let icon_key = self.assignment.chore_type_form.icon_key;
        self.create_chore_type(&label, icon_key)
    }

    // ---- Queries for the views ----

    pub fn students(&mut self) -> Vec<Student> {
        match self.backend().student_service.list_students() {
            Ok(result) => result.students.into_iter().map(student_to_dto).collect(),
            Err(e) => {
                self.report_error("Failed to load students", e);
                Vec::new()
            }
        }
    }

    pub fn student(&mut self, student_id: &str) -> Option<Student> {
        match self.backend().student_service.get_student(student_id) {
            Ok(student) => student.map(student_to_dto),
            Err(e) => {
                self.report_error("Failed to load student", e);
                None
            }
        }
    }

    pub fn chore_types(&mut self) -> Vec<ChoreType> {
        match self.backend().chore_type_service.list_chore_types() {
            Ok(result) => result.chore_types.into_iter().map(chore_type_to_dto).collect(),
            Err(e) => {
                self.report_error("Failed to load chore types", e);
                Vec::new()
            }
        }
    }

    /// Icon for a chore's type, or the default icon if the type is unknown
    pub fn resolve_icon(&mut self, chore_type_id: &str) -> IconKey {
        match self.backend().chore_type_service.resolve_icon(chore_type_id) {
            Ok(icon_key) => icon_key,
            Err(e) => {
                self.report_error("Failed to load chore type", e);
                IconKey::DEFAULT
            }
        }
    }

    #[cfg(test)]
    pub fn all_chores(&mut self) -> Vec<Chore> {
        match self.backend().chore_service.list_chores() {
            Ok(result) => ChoreMapper::to_dtos(result.chores),
            Err(e) => {
                self.report_error("Failed to load chores", e);
                Vec::new()
            }
        }
    }

    /// The current student's chores, assigned first and completed last
    pub fn current_student_chores(&mut self) -> Vec<Chore> {
        let Some(student_id) = self.current_student().map(|s| s.id.clone()) else {
            return Vec::new();
        };
        match self.backend().chore_service.chores_for_student(&student_id) {
            Ok(result) => ChoreMapper::to_dtos(result.chores),
            Err(e) => {
                self.report_error("Failed to load chores", e);
                Vec::new()
            }
        }
    }

    pub fn pending_chores(&mut self) -> Vec<Chore> {
        match self.backend().chore_service.pending_chores() {
            Ok(result) => ChoreMapper::to_dtos(result.chores),
            Err(e) => {
                self.report_error("Failed to load chores", e);
                Vec::new()
            }
        }
    }

    pub fn active_chores(&mut self) -> Vec<Chore> {
        match self.backend().chore_service.active_chores() {
            Ok(result) => ChoreMapper::to_dtos(result.chores),
            Err(e) => {
                self.report_error("Failed to load chores", e);
                Vec::new()
            }
        }
    }

    /// Count shown on the "Needs Approval" badge
    pub fn pending_count(&mut self) -> usize {
        self.pending_chores().len()
    }

    pub fn missions_ready(&mut self, student_id: &str) -> usize {
        match self.backend().chore_service.count_assigned_for_student(student_id) {
            Ok(count) => count,
            Err(e) => {
                self.report_error("Failed to count chores", e);
                0
            }
        }
    }
}
