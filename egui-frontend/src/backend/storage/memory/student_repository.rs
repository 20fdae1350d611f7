use anyhow::Result;
use log::debug;
use std::sync::Arc;

use super::connection::MemoryConnection;
use crate::backend::domain::models::student::Student;
use crate::backend::storage::traits::StudentStorage;

/// In-memory student repository over the fixed roster
#[derive(Clone)]
pub struct StudentRepository {
    connection: Arc<MemoryConnection>,
}

impl StudentRepository {
    pub fn new(connection: Arc<MemoryConnection>) -> Self {
        Self { connection }
    }
}

impl StudentStorage for StudentRepository {
    fn get_student(&self, student_id: &str) -> Result<Option<Student>> {
        let students = self.connection.students()?;
        let student = students.iter().find(|s| s.id == student_id).cloned();
        debug!("Student lookup {}: found={}", student_id, student.is_some());
        Ok(student)
    }

    fn list_students(&self) -> Result<Vec<Student>> {
        Ok(self.connection.students()?.clone())
    }
}
