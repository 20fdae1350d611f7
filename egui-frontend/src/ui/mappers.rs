use shared::*;

use crate::backend::domain::models::chore::Chore as DomainChore;
use crate::backend::domain::models::chore_type::ChoreType as DomainChoreType;
use crate::backend::domain::models::student::Student as DomainStudent;

/// Helper function to convert a domain student to the shared student
pub fn student_to_dto(student: DomainStudent) -> Student {
    Student {
        id: student.id,
        name: student.name,
        age: student.age,
        avatar: student.avatar,
        theme: student.theme.token().to_string(),
    }
}

/// Helper function to convert a domain chore type to the shared chore type
pub fn chore_type_to_dto(chore_type: DomainChoreType) -> ChoreType {
    ChoreType {
        id: chore_type.id,
        label: chore_type.label,
        icon_key: chore_type.icon_key,
    }
}

/// Simple chore mapper for converting domain chores to DTOs
pub struct ChoreMapper;

impl ChoreMapper {
    pub fn to_dto(domain_chore: DomainChore) -> Chore {
        Chore {
            id: domain_chore.id,
            student_id: domain_chore.student_id,
            chore_type_id: domain_chore.chore_type_id,
            label: domain_chore.label,
            status: domain_chore.status,
            timestamp: domain_chore.created_at.timestamp_millis(),
        }
    }

    pub fn to_dtos(domain_chores: Vec<DomainChore>) -> Vec<Chore> {
        domain_chores.into_iter().map(Self::to_dto).collect()
    }
}
