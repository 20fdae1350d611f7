use serde::{Deserialize, Serialize};

/// Panel color family for a kid's view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudentTheme {
    Amber,
    Rose,
    Emerald,
}

impl StudentTheme {
    /// Token handed to the UI, which maps it to panel colors
    pub fn token(&self) -> &'static str {
        match self {
            StudentTheme::Amber => "amber",
            StudentTheme::Rose => "rose",
            StudentTheme::Emerald => "emerald",
        }
    }
}

/// Domain model for a kid on the roster.
/// The roster is fixed at startup and never edited at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub avatar: String,
    pub theme: StudentTheme,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_token_matches_serde_name() {
        for theme in [StudentTheme::Amber, StudentTheme::Rose, StudentTheme::Emerald] {
            let json = serde_json::to_value(theme).unwrap();
            assert_eq!(json, theme.token());
        }
    }
}
