//! # Assignment State Module
//!
//! State behind the parent's "Assign a New Mission" panel: which chore type
//! is selected and the inline "create custom chore" form.

use shared::IconKey;

/// Draft for a new custom chore type
#[derive(Debug, Clone, PartialEq)]
pub struct ChoreTypeFormState {
    /// Whether the form replaces the chore type picker
    pub is_open: bool,

    /// Label typed so far
    pub label: String,

    /// Icon picked so far
    pub icon_key: IconKey,
}

impl Default for ChoreTypeFormState {
    fn default() -> Self {
        Self {
            is_open: false,
            label: String::new(),
            icon_key: IconKey::DEFAULT,
        }
    }
}

impl ChoreTypeFormState {
    /// "Save and select" is only enabled for a non-blank label
    pub fn can_submit(&self) -> bool {
        !self.label.trim().is_empty()
    }

    /// Close the form and discard the draft
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Assignment panel state
#[derive(Debug, Clone, Default)]
pub struct AssignmentState {
    /// Chore type new chores are created from
    pub selected_chore_type: Option<String>,

    pub chore_type_form: ChoreTypeFormState,
}

impl AssignmentState {
    pub fn new(selected_chore_type: Option<String>) -> Self {
        Self {
            selected_chore_type,
            chore_type_form: ChoreTypeFormState::default(),
        }
    }

    pub fn is_selected(&self, chore_type_id: &str) -> bool {
        self.selected_chore_type.as_deref() == Some(chore_type_id)
    }
}
