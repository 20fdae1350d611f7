use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::ChoreStatus;

/// Domain model for a chore assigned to one student.
///
/// `label` is copied from the chore type when the chore is assigned and is not
/// kept in sync with the template afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chore {
    pub id: u64,
    pub student_id: String,
    pub chore_type_id: String,
    pub label: String,
    pub status: ChoreStatus,
    pub created_at: DateTime<Utc>,
}

impl Chore {
    pub fn is_pending(&self) -> bool {
        self.status == ChoreStatus::Pending
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}
