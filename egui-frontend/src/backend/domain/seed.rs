//! Starting data for a fresh session: three kids, five chore types and four
//! chores (one of them waiting for approval).

use chrono::{DateTime, Utc};
use shared::{ChoreStatus, IconKey};

use crate::backend::domain::models::chore::Chore;
use crate::backend::domain::models::chore_type::ChoreType;
use crate::backend::domain::models::student::{Student, StudentTheme};
use crate::backend::storage::memory::MemoryConnection;

fn student(id: &str, name: &str, age: u8, avatar: &str, theme: StudentTheme) -> Student {
    Student {
        id: id.to_string(),
        name: name.to_string(),
        age,
        avatar: avatar.to_string(),
        theme,
    }
}

fn chore_type(id: &str, label: &str, icon_key: IconKey) -> ChoreType {
    ChoreType {
        id: id.to_string(),
        label: label.to_string(),
        icon_key,
    }
}

fn chore(id: u64, student_id: &str, chore_type_id: &str, label: &str, status: ChoreStatus, created_at: DateTime<Utc>) -> Chore {
    Chore {
        id,
        student_id: student_id.to_string(),
        chore_type_id: chore_type_id.to_string(),
        label: label.to_string(),
        status,
        created_at,
    }
}

pub fn students() -> Vec<Student> {
    vec![
        student("s1", "Leo", 3, "🦊", StudentTheme::Amber),
        student("s2", "Mia", 7, "🐝", StudentTheme::Rose),
        student("s3", "Sam", 12, "🐢", StudentTheme::Emerald),
    ]
}

pub fn chore_types() -> Vec<ChoreType> {
    vec![
        chore_type("bed", "Make Bed", IconKey::Bed),
        chore_type("clean", "Tidy Room", IconKey::Clean),
        chore_type("dishes", "Dishes", IconKey::Dishes),
        chore_type("laundry", "Laundry", IconKey::Laundry),
        chore_type("homework", "Homework", IconKey::Homework),
    ]
}

pub fn chores(created_at: DateTime<Utc>) -> Vec<Chore> {
    vec![
        chore(1, "s1", "bed", "Make Bed", ChoreStatus::Assigned, created_at),
        chore(2, "s1", "clean", "Pick Up Toys", ChoreStatus::Pending, created_at),
        chore(3, "s2", "homework", "Read 20 Minutes", ChoreStatus::Completed, created_at),
        chore(4, "s3", "dishes", "Load Dishwasher", ChoreStatus::Assigned, created_at),
    ]
}

/// Chore type preselected in the assignment form
pub fn default_chore_type_id() -> Option<String> {
    chore_types().first().map(|t| t.id.clone())
}

/// A connection loaded with the full seed data
pub fn seeded_connection() -> MemoryConnection {
    MemoryConnection::with_data(students(), chore_types(), chores(Utc::now()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_chores_reference_known_students_and_types() {
        let student_ids: Vec<String> = students().into_iter().map(|s| s.id).collect();
        let type_ids: Vec<String> = chore_types().into_iter().map(|t| t.id).collect();

        for chore in chores(Utc::now()) {
            assert!(student_ids.contains(&chore.student_id));
            assert!(type_ids.contains(&chore.chore_type_id));
        }
    }

    #[test]
    fn test_seed_has_one_pending_chore() {
        let pending: Vec<u64> = chores(Utc::now())
            .into_iter()
            .filter(|c| c.status == ChoreStatus::Pending)
            .map(|c| c.id)
            .collect();
        assert_eq!(pending, vec![2]);
    }

    #[test]
    fn test_default_chore_type_is_first_in_catalog() {
        assert_eq!(default_chore_type_id().as_deref(), Some("bed"));
    }
}
