use anyhow::Result;
use log::{info, warn};
use shared::IconKey;
use std::sync::Arc;

use crate::backend::domain::commands::chore_type::{
    CreateChoreTypeCommand, CreateChoreTypeResult, ListChoreTypesResult,
};
use crate::backend::domain::id_generator::TimestampIdGenerator;
use crate::backend::domain::models::chore_type::ChoreType;
use crate::backend::storage::memory::{ChoreTypeRepository, MemoryConnection};
use crate::backend::storage::traits::ChoreTypeStorage;

/// Service for the chore type catalog
#[derive(Clone)]
pub struct ChoreTypeService {
    chore_type_repository: ChoreTypeRepository,
    ids: TimestampIdGenerator,
}

impl ChoreTypeService {
    pub fn new(connection: Arc<MemoryConnection>, ids: TimestampIdGenerator) -> Self {
        Self {
            chore_type_repository: ChoreTypeRepository::new(connection),
            ids,
        }
    }

    /// List the catalog in creation order
    pub fn list_chore_types(&self) -> Result<ListChoreTypesResult> {
        let chore_types = self.chore_type_repository.list_chore_types()?;
        Ok(ListChoreTypesResult { chore_types })
    }

    /// Create a custom chore type.
    ///
    /// A blank or whitespace-only label creates nothing. The label is stored
    /// trimmed. The icon is an [`IconKey`], so it always resolves.
    pub fn create_chore_type(&self, command: CreateChoreTypeCommand) -> Result<CreateChoreTypeResult> {
        let label = command.label.trim();
        if label.is_empty() {
            warn!("Ignoring chore type with blank label");
            return Ok(CreateChoreTypeResult { chore_type: None });
        }

        let chore_type = ChoreType {
            id: ChoreType::generate_custom_id(self.ids.next_id()),
            label: label.to_string(),
            icon_key: command.icon_key,
        };
        self.chore_type_repository.store_chore_type(&chore_type)?;

        info!("Created chore type '{}' with ID: {} (icon {})", chore_type.label, chore_type.id, chore_type.icon_key);

        Ok(CreateChoreTypeResult { chore_type: Some(chore_type) })
    }

    /// Icon for a chore type ID, falling back to the default icon when the
    /// type is unknown
    pub fn resolve_icon(&self, chore_type_id: &str) -> Result<IconKey> {
        Ok(self
            .chore_type_repository
            .get_chore_type(chore_type_id)?
            .map(|t| t.icon_key)
            .unwrap_or(IconKey::DEFAULT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::chore_type::CUSTOM_CHORE_TYPE_PREFIX;
    use crate::backend::domain::seed;

    fn setup_test() -> ChoreTypeService {
        ChoreTypeService::new(Arc::new(seed::seeded_connection()), TimestampIdGenerator::new())
    }

    #[test]
    fn test_create_chore_type() {
        let service = setup_test();
        let before = service.list_chore_types().unwrap().chore_types.len();

        let command = CreateChoreTypeCommand {
            label: "  Water Plants ".to_string(),
            icon_key: IconKey::Star,
        };
        let created = service.create_chore_type(command).unwrap().chore_type.unwrap();

        assert_eq!(created.label, "Water Plants");
        assert_eq!(created.icon_key, IconKey::Star);
        assert!(created.id.starts_with(CUSTOM_CHORE_TYPE_PREFIX));

        let chore_types = service.list_chore_types().unwrap().chore_types;
        assert_eq!(chore_types.len(), before + 1);
        assert_eq!(chore_types.last(), Some(&created));
    }

    #[test]
    fn test_create_chore_type_with_blank_label() {
        let service = setup_test();
        let before = service.list_chore_types().unwrap().chore_types;

        for label in ["", "   ", "\t\n"] {
            let command = CreateChoreTypeCommand { label: label.to_string(), icon_key: IconKey::Heart };
            assert!(service.create_chore_type(command).unwrap().chore_type.is_none());
        }

        assert_eq!(service.list_chore_types().unwrap().chore_types, before);
    }

    #[test]
    fn test_custom_ids_do_not_collide() {
        let service = setup_test();
        let a = service
            .create_chore_type(CreateChoreTypeCommand { label: "Feed Cat".to_string(), icon_key: IconKey::Heart })
            .unwrap()
            .chore_type
            .unwrap();
        let b = service
            .create_chore_type(CreateChoreTypeCommand { label: "Feed Dog".to_string(), icon_key: IconKey::Heart })
            .unwrap()
            .chore_type
            .unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_resolve_icon() {
        let service = setup_test();
        assert_eq!(service.resolve_icon("laundry").unwrap(), IconKey::Laundry);
        assert_eq!(service.resolve_icon("no-such-type").unwrap(), IconKey::Star);
    }
}
