use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle stage of a chore.
///
/// The normal flow is `Assigned -> Pending` (kid taps "I finished!") and then
/// `Pending -> Completed` or `Pending -> Assigned` (parent review), but any
/// status may be set on any chore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChoreStatus {
    /// Assigned by a parent, not yet done
    Assigned,
    /// Marked done by the kid, waiting for a parent
    Pending,
    /// Approved by a parent
    Completed,
}

impl ChoreStatus {
    /// Sort rank used by the kid view: assigned first, completed last
    pub fn rank(&self) -> u8 {
        match self {
            ChoreStatus::Assigned => 1,
            ChoreStatus::Pending => 2,
            ChoreStatus::Completed => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChoreStatus::Assigned => "assigned",
            ChoreStatus::Pending => "pending",
            ChoreStatus::Completed => "completed",
        }
    }

    /// Whether the chore still shows up in the parent's active list
    pub fn is_active(&self) -> bool {
        !matches!(self, ChoreStatus::Completed)
    }
}

impl fmt::Display for ChoreStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Symbolic key into the fixed icon library.
///
/// Chore types can only point at one of these keys. Lookups by raw string
/// fall back to [`IconKey::DEFAULT`] so a dangling key never breaks rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKey {
    Bed,
    Clean,
    Dishes,
    Laundry,
    Homework,
    Star,
    Heart,
}

impl IconKey {
    /// Every icon in picker order
    pub const ALL: [IconKey; 7] = [
        IconKey::Bed,
        IconKey::Clean,
        IconKey::Dishes,
        IconKey::Laundry,
        IconKey::Homework,
        IconKey::Star,
        IconKey::Heart,
    ];

    /// Fallback for unknown keys and unresolved chore types
    pub const DEFAULT: IconKey = IconKey::Star;

    pub fn as_str(&self) -> &'static str {
        match self {
            IconKey::Bed => "bed",
            IconKey::Clean => "clean",
            IconKey::Dishes => "dishes",
            IconKey::Laundry => "laundry",
            IconKey::Homework => "homework",
            IconKey::Star => "star",
            IconKey::Heart => "heart",
        }
    }

    /// Parse a symbolic key, returning `None` for anything outside the library
    pub fn from_key(key: &str) -> Option<IconKey> {
        IconKey::ALL.iter().copied().find(|icon| icon.as_str() == key)
    }

    /// Parse a symbolic key, falling back to the default icon
    pub fn resolve(key: &str) -> IconKey {
        IconKey::from_key(key).unwrap_or(IconKey::DEFAULT)
    }
}

impl Default for IconKey {
    fn default() -> Self {
        IconKey::DEFAULT
    }
}

impl fmt::Display for IconKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A kid on the fixed roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Student ID, e.g. "s1"
    pub id: String,
    pub name: String,
    pub age: u8,
    /// Emoji avatar shown on badges and cards
    pub avatar: String,
    /// Theme token picking the panel colors of the kid view ("amber", "rose", ...)
    pub theme: String,
}

/// Reusable chore template (label + icon)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoreType {
    /// Chore type ID: seeded types use their icon name, custom ones are "custom-<epoch_millis>"
    pub id: String,
    pub label: String,
    pub icon_key: IconKey,
}

/// A single chore assigned to one student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chore {
    /// Chore ID derived from epoch milliseconds
    pub id: u64,
    pub student_id: String,
    /// ID of the chore type this chore was created from
    #[serde(rename = "type")]
    pub chore_type_id: String,
    /// Label copied from the chore type when the chore was assigned
    pub label: String,
    pub status: ChoreStatus,
    /// Creation time in epoch milliseconds
    pub timestamp: i64,
}

/// Top-level screens of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Landing,
    Student,
    Parent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_rank_orders_assigned_first() {
        assert!(ChoreStatus::Assigned.rank() < ChoreStatus::Pending.rank());
        assert!(ChoreStatus::Pending.rank() < ChoreStatus::Completed.rank());
    }

    #[test]
    fn test_status_is_active() {
        assert!(ChoreStatus::Assigned.is_active());
        assert!(ChoreStatus::Pending.is_active());
        assert!(!ChoreStatus::Completed.is_active());
    }

    #[test]
    fn test_icon_key_lookup() {
        assert_eq!(IconKey::from_key("laundry"), Some(IconKey::Laundry));
        assert_eq!(IconKey::from_key("rocket"), None);
        assert_eq!(IconKey::resolve("rocket"), IconKey::Star);
        assert_eq!(IconKey::resolve("heart"), IconKey::Heart);
    }

    #[test]
    fn test_icon_keys_are_unique() {
        for (i, a) in IconKey::ALL.iter().enumerate() {
            for b in IconKey::ALL.iter().skip(i + 1) {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }

    #[test]
    fn test_chore_serializes_with_original_field_names() {
        let chore = Chore {
            id: 2,
            student_id: "s1".to_string(),
            chore_type_id: "clean".to_string(),
            label: "Pick Up Toys".to_string(),
            status: ChoreStatus::Pending,
            timestamp: 1_700_000_000_000,
        };

        let json = serde_json::to_value(&chore).unwrap();
        assert_eq!(json["studentId"], "s1");
        assert_eq!(json["type"], "clean");
        assert_eq!(json["status"], "pending");

        let chore_type = ChoreType {
            id: "bed".to_string(),
            label: "Make Bed".to_string(),
            icon_key: IconKey::Bed,
        };
        let json = serde_json::to_value(&chore_type).unwrap();
        assert_eq!(json["iconKey"], "bed");
    }

    #[test]
    fn test_view_defaults_to_landing() {
        assert_eq!(View::default(), View::Landing);
    }
}
