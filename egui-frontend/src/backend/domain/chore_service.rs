use anyhow::Result;
use chrono::{TimeZone, Utc};
use log::{info, warn};
use shared::ChoreStatus;
use std::sync::Arc;

use crate::backend::domain::commands::chore::{
    AddChoreCommand, AddChoreResult, DeleteChoreCommand, DeleteChoreResult, ListChoresResult,
    UpdateChoreStatusCommand, UpdateChoreStatusResult,
};
use crate::backend::domain::id_generator::TimestampIdGenerator;
use crate::backend::domain::models::chore::Chore;
use crate::backend::storage::memory::{ChoreRepository, ChoreTypeRepository, MemoryConnection, StudentRepository};
use crate::backend::storage::traits::{ChoreStorage, ChoreTypeStorage, StudentStorage};

/// Service for assigning, reviewing and removing chores
#[derive(Clone)]
pub struct ChoreService {
    chore_repository: ChoreRepository,
    chore_type_repository: ChoreTypeRepository,
    student_repository: StudentRepository,
    ids: TimestampIdGenerator,
}

impl ChoreService {
    pub fn new(connection: Arc<MemoryConnection>, ids: TimestampIdGenerator) -> Self {
        Self {
            chore_repository: ChoreRepository::new(connection.clone()),
            chore_type_repository: ChoreTypeRepository::new(connection.clone()),
            student_repository: StudentRepository::new(connection),
            ids,
        }
    }

    /// Assign a new chore to a student from the selected template.
    ///
    /// Nothing is added when no template is selected, the template is unknown,
    /// or the student is not on the roster.
    pub fn add_chore(&self, command: AddChoreCommand) -> Result<AddChoreResult> {
        let Some(chore_type_id) = command.chore_type_id.as_deref() else {
            warn!("No chore type selected, not assigning a chore to {}", command.student_id);
            return Ok(AddChoreResult { chore: None });
        };

        let Some(template) = self.chore_type_repository.get_chore_type(chore_type_id)? else {
            warn!("Chore type not found: {}", chore_type_id);
            return Ok(AddChoreResult { chore: None });
        };

        if self.student_repository.get_student(&command.student_id)?.is_none() {
            warn!("Student not found: {}", command.student_id);
            return Ok(AddChoreResult { chore: None });
        }

        let id = self.ids.next_id();
        let created_at = Utc
            .timestamp_millis_opt(id as i64)
            .single()
            .unwrap_or_else(Utc::now);

        let chore = Chore {
            id,
            student_id: command.student_id,
            chore_type_id: template.id,
            label: template.label,
            status: ChoreStatus::Assigned,
            created_at,
        };
        self.chore_repository.store_chore(&chore)?;

        info!("Assigned chore '{}' to {} with ID: {}", chore.label, chore.student_id, chore.id);

        Ok(AddChoreResult { chore: Some(chore) })
    }

    /// Set the status of a chore. Any transition is allowed.
    pub fn update_chore_status(&self, command: UpdateChoreStatusCommand) -> Result<UpdateChoreStatusResult> {
        let chore = self.chore_repository.update_chore_status(command.chore_id, command.status)?;

        match &chore {
            Some(chore) => info!("Chore {} ('{}') is now {}", chore.id, chore.label, chore.status),
            None => warn!("Chore not found for status update: {}", command.chore_id),
        }

        Ok(UpdateChoreStatusResult { chore })
    }

    /// Delete a chore. Unknown IDs are ignored.
    pub fn delete_chore(&self, command: DeleteChoreCommand) -> Result<DeleteChoreResult> {
        let deleted = self.chore_repository.delete_chore(command.chore_id)?;

        if deleted {
            info!("Deleted chore {}", command.chore_id);
        } else {
            warn!("Chore not found for delete: {}", command.chore_id);
        }

        Ok(DeleteChoreResult { deleted })
    }

    /// All chores in assignment order
    #[cfg(test)]
    pub fn list_chores(&self) -> Result<ListChoresResult> {
        let chores = self.chore_repository.list_chores()?;
        Ok(ListChoresResult { chores })
    }

    /// Chores belonging to one student, assigned first and completed last.
    /// Chores with the same status keep their assignment order.
    pub fn chores_for_student(&self, student_id: &str) -> Result<ListChoresResult> {
        let mut chores: Vec<Chore> = self
            .chore_repository
            .list_chores()?
            .into_iter()
            .filter(|c| c.student_id == student_id)
            .collect();
        chores.sort_by_key(|c| c.status.rank());
        Ok(ListChoresResult { chores })
    }

    /// Chores waiting for a parent, across all students
    pub fn pending_chores(&self) -> Result<ListChoresResult> {
        let chores = self
            .chore_repository
            .list_chores()?
            .into_iter()
            .filter(|c| c.is_pending())
            .collect();
        Ok(ListChoresResult { chores })
    }

    /// Chores that are not completed yet, across all students
    pub fn active_chores(&self) -> Result<ListChoresResult> {
        let chores = self
            .chore_repository
            .list_chores()?
            .into_iter()
            .filter(|c| c.is_active())
            .collect();
        Ok(ListChoresResult { chores })
    }

    /// Number of chores a student still has to do
    pub fn count_assigned_for_student(&self, student_id: &str) -> Result<usize> {
        Ok(self
            .chore_repository
            .list_chores()?
            .iter()
            .filter(|c| c.student_id == student_id && c.status == ChoreStatus::Assigned)
            .count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::chore_type::ChoreType;
    use crate::backend::domain::seed;
    use shared::IconKey;

    fn setup_test() -> ChoreService {
        ChoreService::new(Arc::new(seed::seeded_connection()), TimestampIdGenerator::new())
    }

    fn setup_with_chores(chores: Vec<Chore>) -> ChoreService {
        let conn = MemoryConnection::with_data(seed::students(), seed::chore_types(), chores);
        ChoreService::new(Arc::new(conn), TimestampIdGenerator::new())
    }

    fn chore(id: u64, student_id: &str, status: ChoreStatus) -> Chore {
        Chore {
            id,
            student_id: student_id.to_string(),
            chore_type_id: "bed".to_string(),
            label: format!("Chore {}", id),
            status,
            created_at: Utc::now(),
        }
    }

    fn ids(chores: &[Chore]) -> Vec<u64> {
        chores.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_add_chore() {
        let service = setup_test();
        let command = AddChoreCommand {
            student_id: "s2".to_string(),
            chore_type_id: Some("laundry".to_string()),
        };

        let chore = service.add_chore(command).unwrap().chore.unwrap();
        assert_eq!(chore.student_id, "s2");
        assert_eq!(chore.chore_type_id, "laundry");
        assert_eq!(chore.label, "Laundry");
        assert_eq!(chore.status, ChoreStatus::Assigned);

        let chores = service.list_chores().unwrap().chores;
        assert_eq!(chores.len(), 5);
        assert_eq!(chores.last(), Some(&chore));
    }

    #[test]
    fn test_add_chore_without_selected_type() {
        let service = setup_test();
        let before = service.list_chores().unwrap().chores;

        let command = AddChoreCommand { student_id: "s1".to_string(), chore_type_id: None };
        assert!(service.add_chore(command).unwrap().chore.is_none());

        let command = AddChoreCommand { student_id: "s1".to_string(), chore_type_id: Some("gone".to_string()) };
        assert!(service.add_chore(command).unwrap().chore.is_none());

        assert_eq!(service.list_chores().unwrap().chores, before);
    }

    #[test]
    fn test_add_chore_for_unknown_student() {
        let service = setup_test();
        let command = AddChoreCommand { student_id: "s9".to_string(), chore_type_id: Some("bed".to_string()) };
        assert!(service.add_chore(command).unwrap().chore.is_none());
        assert_eq!(service.list_chores().unwrap().chores.len(), 4);
    }

    #[test]
    fn test_rapid_adds_get_distinct_ids() {
        let service = setup_test();
        let mut seen = Vec::new();
        for _ in 0..20 {
            let command = AddChoreCommand { student_id: "s3".to_string(), chore_type_id: Some("dishes".to_string()) };
            let chore = service.add_chore(command).unwrap().chore.unwrap();
            assert!(!seen.contains(&chore.id));
            seen.push(chore.id);
        }
    }

    #[test]
    fn test_label_is_copied_at_assignment_time() {
        let conn = Arc::new(seed::seeded_connection());
        let service = ChoreService::new(conn.clone(), TimestampIdGenerator::new());
        let command = AddChoreCommand { student_id: "s1".to_string(), chore_type_id: Some("bed".to_string()) };
        let chore = service.add_chore(command).unwrap().chore.unwrap();

        {
            let mut chore_types = conn.chore_types_mut().unwrap();
            chore_types[0] = ChoreType {
                id: "bed".to_string(),
                label: "Make Bunk Bed".to_string(),
                icon_key: IconKey::Bed,
            };
        }

        let stored = service.list_chores().unwrap().chores.into_iter().find(|c| c.id == chore.id).unwrap();
        assert_eq!(stored.label, "Make Bed");
    }

    #[test]
    fn test_pending_then_completed() {
        let service = setup_test();
        let before = service.list_chores().unwrap().chores;

        service
            .update_chore_status(UpdateChoreStatusCommand { chore_id: 2, status: ChoreStatus::Pending })
            .unwrap();
        let result = service
            .update_chore_status(UpdateChoreStatusCommand { chore_id: 2, status: ChoreStatus::Completed })
            .unwrap();
        assert_eq!(result.chore.unwrap().status, ChoreStatus::Completed);

        let after = service.list_chores().unwrap().chores;
        assert_eq!(after.len(), before.len());
        for (old, new) in before.iter().zip(after.iter()) {
            if old.id == 2 {
                assert_eq!(new.status, ChoreStatus::Completed);
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn test_any_transition_is_allowed() {
        let service = setup_test();
        // Chore 1 was never marked pending
        let result = service
            .update_chore_status(UpdateChoreStatusCommand { chore_id: 1, status: ChoreStatus::Completed })
            .unwrap();
        assert_eq!(result.chore.unwrap().status, ChoreStatus::Completed);

        let result = service
            .update_chore_status(UpdateChoreStatusCommand { chore_id: 3, status: ChoreStatus::Assigned })
            .unwrap();
        assert_eq!(result.chore.unwrap().status, ChoreStatus::Assigned);
    }

    #[test]
    fn test_update_nonexistent_chore() {
        let service = setup_test();
        let before = service.list_chores().unwrap().chores;
        let result = service
            .update_chore_status(UpdateChoreStatusCommand { chore_id: 404, status: ChoreStatus::Completed })
            .unwrap();
        assert!(result.chore.is_none());
        assert_eq!(service.list_chores().unwrap().chores, before);
    }

    #[test]
    fn test_delete_chore() {
        let service = setup_test();
        let result = service.delete_chore(DeleteChoreCommand { chore_id: 2 }).unwrap();
        assert!(result.deleted);
        assert_eq!(ids(&service.list_chores().unwrap().chores), vec![1, 3, 4]);
    }

    #[test]
    fn test_delete_nonexistent_chore() {
        let service = setup_test();
        let result = service.delete_chore(DeleteChoreCommand { chore_id: 404 }).unwrap();
        assert!(!result.deleted);
        assert_eq!(ids(&service.list_chores().unwrap().chores), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_chores_for_student_sorted_by_status() {
        let service = setup_with_chores(vec![
            chore(10, "s2", ChoreStatus::Pending),
            chore(11, "s2", ChoreStatus::Assigned),
            chore(12, "s1", ChoreStatus::Assigned),
            chore(13, "s2", ChoreStatus::Completed),
        ]);

        let chores = service.chores_for_student("s2").unwrap().chores;
        let statuses: Vec<ChoreStatus> = chores.iter().map(|c| c.status).collect();
        assert_eq!(statuses, vec![ChoreStatus::Assigned, ChoreStatus::Pending, ChoreStatus::Completed]);
        assert_eq!(ids(&chores), vec![11, 10, 13]);
    }

    #[test]
    fn test_chores_for_student_sort_is_stable() {
        let service = setup_with_chores(vec![
            chore(1, "s1", ChoreStatus::Completed),
            chore(2, "s1", ChoreStatus::Assigned),
            chore(3, "s1", ChoreStatus::Pending),
            chore(4, "s1", ChoreStatus::Assigned),
            chore(5, "s1", ChoreStatus::Completed),
            chore(6, "s1", ChoreStatus::Pending),
        ]);

        let chores = service.chores_for_student("s1").unwrap().chores;
        assert_eq!(ids(&chores), vec![2, 4, 3, 6, 1, 5]);
    }

    #[test]
    fn test_chores_for_student_without_chores() {
        let service = setup_with_chores(vec![chore(1, "s1", ChoreStatus::Assigned)]);
        assert!(service.chores_for_student("s3").unwrap().chores.is_empty());
    }

    #[test]
    fn test_seed_pending_count() {
        let service = setup_test();
        let pending = service.pending_chores().unwrap().chores;
        assert_eq!(ids(&pending), vec![2]);
    }

    #[test]
    fn test_active_chores_exclude_completed() {
        let service = setup_test();
        assert_eq!(ids(&service.active_chores().unwrap().chores), vec![1, 2, 4]);
    }

    #[test]
    fn test_count_assigned_for_student() {
        let service = setup_test();
        assert_eq!(service.count_assigned_for_student("s1").unwrap(), 1);
        assert_eq!(service.count_assigned_for_student("s2").unwrap(), 0);
        assert_eq!(service.count_assigned_for_student("s3").unwrap(), 1);
    }

    #[test]
    fn test_every_chore_belongs_to_a_known_student() {
        let service = setup_test();
        for student_id in ["s1", "s2", "s3", "s4"] {
            let command = AddChoreCommand { student_id: student_id.to_string(), chore_type_id: Some("clean".to_string()) };
            service.add_chore(command).unwrap();
        }
        let roster: Vec<String> = seed::students().into_iter().map(|s| s.id).collect();
        for chore in service.list_chores().unwrap().chores {
            assert!(roster.contains(&chore.student_id));
        }
    }
}
