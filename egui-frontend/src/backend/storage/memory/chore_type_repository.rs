use anyhow::Result;
use log::debug;
use std::sync::Arc;

use super::connection::MemoryConnection;
use crate::backend::domain::models::chore_type::ChoreType;
use crate::backend::storage::traits::ChoreTypeStorage;

/// In-memory chore type catalog
#[derive(Clone)]
pub struct ChoreTypeRepository {
    connection: Arc<MemoryConnection>,
}

impl ChoreTypeRepository {
    pub fn new(connection: Arc<MemoryConnection>) -> Self {
        Self { connection }
    }
}

impl ChoreTypeStorage for ChoreTypeRepository {
    fn store_chore_type(&self, chore_type: &ChoreType) -> Result<()> {
        let mut chore_types = self.connection.chore_types_mut()?;
        chore_types.push(chore_type.clone());
        debug!("Stored chore type {} ({} in catalog)", chore_type.id, chore_types.len());
        Ok(())
    }

    fn get_chore_type(&self, chore_type_id: &str) -> Result<Option<ChoreType>> {
        let chore_types = self.connection.chore_types()?;
        Ok(chore_types.iter().find(|t| t.id == chore_type_id).cloned())
    }

    fn list_chore_types(&self) -> Result<Vec<ChoreType>> {
        Ok(self.connection.chore_types()?.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::IconKey;

    #[test]
    fn test_store_appends_to_catalog() {
        let repo = ChoreTypeRepository::new(Arc::new(MemoryConnection::default()));
        let first = ChoreType { id: "a".to_string(), label: "A".to_string(), icon_key: IconKey::Bed };
        let second = ChoreType { id: "b".to_string(), label: "B".to_string(), icon_key: IconKey::Heart };

        repo.store_chore_type(&first).unwrap();
        repo.store_chore_type(&second).unwrap();

        assert_eq!(repo.list_chore_types().unwrap(), vec![first, second.clone()]);
        assert_eq!(repo.get_chore_type("b").unwrap(), Some(second));
        assert!(repo.get_chore_type("c").unwrap().is_none());
    }
}
