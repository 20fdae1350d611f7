//! # Icon Library
//!
//! Maps [`IconKey`] values to the glyphs egui draws. The default font set
//! ships an emoji fallback, so every glyph here renders without extra assets.

use shared::IconKey;

/// Glyph for a chore type icon
pub fn icon_glyph(icon_key: IconKey) -> &'static str {
    match icon_key {
        IconKey::Bed => "🛏",
        IconKey::Clean => "✨",
        IconKey::Dishes => "🍴",
        IconKey::Laundry => "👕",
        IconKey::Homework => "📖",
        IconKey::Star => "⭐",
        IconKey::Heart => "❤",
    }
}

// App chrome
pub const PARENT_SHIELD: &str = "🛡";
pub const KIDS_SMILE: &str = "😊";
pub const BACK: &str = "↩";
pub const ADD: &str = "➕";
pub const DELETE: &str = "🗑";
pub const WAITING: &str = "🕒";
pub const APPROVED: &str = "✔";
pub const CELEBRATE: &str = "⭐";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_has_a_glyph() {
        for icon in IconKey::ALL {
            assert!(!icon_glyph(icon).is_empty());
        }
    }
}
