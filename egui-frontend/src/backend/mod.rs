//! # Backend Module for egui Frontend
//!
//! Direct, synchronous access to the domain services for the egui UI. All
//! services share one in-memory [`MemoryConnection`]; there is no IO layer.

use anyhow::Result;
use std::sync::Arc;

pub mod domain;
pub mod storage;

use storage::memory::MemoryConnection;

/// Main backend struct that orchestrates all services
pub struct Backend {
    pub student_service: domain::StudentService,
    pub chore_type_service: domain::ChoreTypeService,
    pub chore_service: domain::ChoreService,
}

impl Backend {
    /// Create a backend loaded with the seed roster, catalog and chores
    pub fn new() -> Result<Self> {
        Ok(Self::with_connection(Arc::new(domain::seed::seeded_connection())))
    }

    /// Create a backend over an existing connection
    pub fn with_connection(connection: Arc<MemoryConnection>) -> Self {
        let ids = domain::TimestampIdGenerator::new();

        let student_service = domain::StudentService::new(connection.clone());
        let chore_type_service = domain::ChoreTypeService::new(connection.clone(), ids.clone());
        let chore_service = domain::ChoreService::new(connection, ids);

        Backend {
            student_service,
            chore_type_service,
            chore_service,
        }
    }
}
