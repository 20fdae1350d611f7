//! Domain-level command and result types.
//! The UI builds commands from its own state and reads results back; the
//! `shared` DTOs are only produced at the mapping layer.

pub mod chore {
    use crate::backend::domain::models::chore::Chore;
    use shared::ChoreStatus;

    /// Input for assigning a chore to a student.
    #[derive(Debug, Clone)]
    pub struct AddChoreCommand {
        pub student_id: String,
        /// Template selected in the assignment form, if any
        pub chore_type_id: Option<String>,
    }

    /// Input for changing the status of a chore.
    #[derive(Debug, Clone)]
    pub struct UpdateChoreStatusCommand {
        pub chore_id: u64,
        pub status: ChoreStatus,
    }

    /// Input for deleting a chore.
    #[derive(Debug, Clone)]
    pub struct DeleteChoreCommand {
        pub chore_id: u64,
    }

    /// Result of assigning a chore. `chore` is None when nothing was added.
    #[derive(Debug, Clone)]
    pub struct AddChoreResult {
        pub chore: Option<Chore>,
    }

    /// Result of a status change. `chore` is None when the ID was unknown.
    #[derive(Debug, Clone)]
    pub struct UpdateChoreStatusResult {
        pub chore: Option<Chore>,
    }

    /// Result of deleting a chore.
    #[derive(Debug, Clone)]
    pub struct DeleteChoreResult {
        pub deleted: bool,
    }

    /// Result of listing chores.
    #[derive(Debug, Clone)]
    pub struct ListChoresResult {
        pub chores: Vec<Chore>,
    }
}

pub mod chore_type {
    use crate::backend::domain::models::chore_type::ChoreType;
    use shared::IconKey;

    /// Input for creating a custom chore type.
    #[derive(Debug, Clone)]
    pub struct CreateChoreTypeCommand {
        pub label: String,
        pub icon_key: IconKey,
    }

    /// Result of creating a chore type. `chore_type` is None when the label was blank.
    #[derive(Debug, Clone)]
    pub struct CreateChoreTypeResult {
        pub chore_type: Option<ChoreType>,
    }

    /// Result of listing chore types.
    #[derive(Debug, Clone)]
    pub struct ListChoreTypesResult {
        pub chore_types: Vec<ChoreType>,
    }
}

pub mod student {
    use crate::backend::domain::models::student::Student;

    /// Result of listing students.
    #[derive(Debug, Clone)]
    pub struct ListStudentsResult {
        pub students: Vec<Student>,
    }
}
