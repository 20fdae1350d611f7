use anyhow::Result;
use log::{debug, warn};
use std::sync::Arc;

use crate::backend::domain::commands::student::ListStudentsResult;
use crate::backend::domain::models::student::Student;
use crate::backend::storage::memory::{MemoryConnection, StudentRepository};
use crate::backend::storage::traits::StudentStorage;

/// Service for looking up kids on the fixed roster
#[derive(Clone)]
pub struct StudentService {
    student_repository: StudentRepository,
}

impl StudentService {
    pub fn new(connection: Arc<MemoryConnection>) -> Self {
        Self {
            student_repository: StudentRepository::new(connection),
        }
    }

    /// List the roster in display order
    pub fn list_students(&self) -> Result<ListStudentsResult> {
        let students = self.student_repository.list_students()?;
        debug!("Listed {} students", students.len());
        Ok(ListStudentsResult { students })
    }

    /// Get a student by ID
    pub fn get_student(&self, student_id: &str) -> Result<Option<Student>> {
        let student = self.student_repository.get_student(student_id)?;
        if student.is_none() {
            warn!("Student not found: {}", student_id);
        }
        Ok(student)
    }
}
