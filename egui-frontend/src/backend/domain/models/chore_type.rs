use serde::{Deserialize, Serialize};
use shared::IconKey;

/// Prefix for chore types created by parents at runtime
pub const CUSTOM_CHORE_TYPE_PREFIX: &str = "custom-";

/// Domain model for a reusable chore template.
/// Chore types are append-only: once created they are never edited or removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoreType {
    pub id: String,
    pub label: String,
    pub icon_key: IconKey,
}

impl ChoreType {
    /// Generate the ID for a parent-created chore type
    pub fn generate_custom_id(timestamp_millis: u64) -> String {
        format!("{}{}", CUSTOM_CHORE_TYPE_PREFIX, timestamp_millis)
    }
}
