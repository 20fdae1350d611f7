use anyhow::Result;
use log::debug;
use shared::ChoreStatus;
use std::sync::Arc;

use super::connection::MemoryConnection;
use crate::backend::domain::models::chore::Chore;
use crate::backend::storage::traits::ChoreStorage;

/// In-memory chore repository
#[derive(Clone)]
pub struct ChoreRepository {
    connection: Arc<MemoryConnection>,
}

impl ChoreRepository {
    pub fn new(connection: Arc<MemoryConnection>) -> Self {
        Self { connection }
    }
}

impl ChoreStorage for ChoreRepository {
    fn store_chore(&self, chore: &Chore) -> Result<()> {
        let mut chores = self.connection.chores_mut()?;
        chores.push(chore.clone());
        debug!("Stored chore {} for {} ({} total)", chore.id, chore.student_id, chores.len());
        Ok(())
    }

    fn list_chores(&self) -> Result<Vec<Chore>> {
        Ok(self.connection.chores()?.clone())
    }

    fn update_chore_status(&self, chore_id: u64, status: ChoreStatus) -> Result<Option<Chore>> {
        let mut chores = self.connection.chores_mut()?;
        match chores.iter_mut().find(|c| c.id == chore_id) {
            Some(chore) => {
                chore.status = status;
                Ok(Some(chore.clone()))
            }
            None => Ok(None),
        }
    }

    fn delete_chore(&self, chore_id: u64) -> Result<bool> {
        let mut chores = self.connection.chores_mut()?;
        let before = chores.len();
        chores.retain(|c| c.id != chore_id);
        Ok(chores.len() < before)
    }
}
