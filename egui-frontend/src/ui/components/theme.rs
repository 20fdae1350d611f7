//! # Theme Configuration
//!
//! Centralized colors for the chore tracker. All visual styling should use
//! these constants so the look stays consistent.
//!
//! ## Usage
//! ```rust
//! use crate::ui::components::theme::{colors, CURRENT_THEME};
//!
//! let fill = CURRENT_THEME.status.pending.background;
//! let text = colors::TEXT_PRIMARY;
//! ```

use eframe::egui::Color32;
use shared::ChoreStatus;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Interactive element colors (buttons, pickers)
    pub interactive: InteractiveColors,
    /// Background and layout colors
    pub layout: LayoutColors,
    /// Text and typography colors
    pub typography: TypographyColors,
    /// Per-status card and chip colors
    pub status: StatusColors,
}

/// Colors for interactive elements
#[derive(Debug, Clone)]
pub struct InteractiveColors {
    /// Main call to action ("I finished!", "Save and select")
    pub primary: Color32,
    /// Approve button
    pub approve: Color32,
    /// Quiet button background ("Needs work", back buttons)
    pub quiet: Color32,
    /// Selected chore type tile
    pub selected_background: Color32,
    pub selected_border: Color32,
    /// Unselected tile border
    pub tile_border: Color32,
    /// Delete affordance on hover
    pub danger: Color32,
    /// Needs-approval count badge
    pub badge: Color32,
}

/// Layout and container colors
#[derive(Debug, Clone)]
pub struct LayoutColors {
    /// Landing page gradient
    pub landing_top: Color32,
    pub landing_bottom: Color32,
    /// Parent dashboard background
    pub dashboard_background: Color32,
    /// Card and container colors
    pub card_background: Color32,
    pub card_shadow: Color32,
    pub card_border: Color32,
    /// Dark shield badge on the parent side
    pub parent_badge: Color32,
}

/// Text and typography colors
#[derive(Debug, Clone)]
pub struct TypographyColors {
    pub primary: Color32,
    pub secondary: Color32,
    pub muted: Color32,
    /// Orange eyebrow text on the landing page
    pub eyebrow: Color32,
    /// Blue accent text on the kids card
    pub accent: Color32,
    pub white: Color32,
}

/// Colors for one chore status
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusPalette {
    pub background: Color32,
    pub border: Color32,
    pub icon_background: Color32,
    pub text: Color32,
}

/// Card and chip colors per chore status
#[derive(Debug, Clone)]
pub struct StatusColors {
    pub assigned: StatusPalette,
    pub pending: StatusPalette,
    pub completed: StatusPalette,
}

impl StatusColors {
    pub fn palette(&self, status: ChoreStatus) -> StatusPalette {
        match status {
            ChoreStatus::Assigned => self.assigned,
            ChoreStatus::Pending => self.pending,
            ChoreStatus::Completed => self.completed,
        }
    }
}

/// The current active theme
pub const CURRENT_THEME: Theme = Theme {
    interactive: InteractiveColors {
        primary: Color32::from_rgb(59, 130, 246),
        approve: Color32::from_rgb(34, 197, 94),
        quiet: Color32::from_rgb(241, 245, 249),
        selected_background: Color32::from_rgb(239, 246, 255),
        selected_border: Color32::from_rgb(59, 130, 246),
        tile_border: Color32::from_rgb(226, 232, 240),
        danger: Color32::from_rgb(239, 68, 68),
        badge: Color32::from_rgb(239, 68, 68),
    },
    layout: LayoutColors {
        landing_top: Color32::from_rgb(254, 252, 232),
        landing_bottom: Color32::WHITE,
        dashboard_background: Color32::from_rgb(248, 250, 252),
        card_background: Color32::WHITE,
        card_shadow: Color32::from_rgba_premultiplied(0, 0, 0, 20),
        card_border: Color32::from_rgb(226, 232, 240),
        parent_badge: Color32::from_rgb(30, 41, 59),
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(30, 41, 59),
        secondary: Color32::from_rgb(71, 85, 105),
        muted: Color32::from_rgb(148, 163, 184),
        eyebrow: Color32::from_rgb(249, 115, 22),
        accent: Color32::from_rgb(37, 99, 235),
        white: Color32::WHITE,
    },
    status: StatusColors {
        assigned: StatusPalette {
            background: Color32::WHITE,
            border: Color32::from_rgb(226, 232, 240),
            icon_background: Color32::from_rgb(219, 234, 254),
            text: Color32::from_rgb(29, 78, 216),
        },
        pending: StatusPalette {
            background: Color32::from_rgb(250, 245, 255),
            border: Color32::from_rgb(233, 213, 255),
            icon_background: Color32::from_rgb(243, 232, 255),
            text: Color32::from_rgb(126, 34, 206),
        },
        completed: StatusPalette {
            background: Color32::from_rgb(240, 253, 244),
            border: Color32::from_rgb(187, 247, 208),
            icon_background: Color32::from_rgb(220, 252, 231),
            text: Color32::from_rgb(21, 128, 61),
        },
    },
};

/// Gradient for a kid's panel, picked by the student's theme token.
/// Unknown tokens get a neutral slate panel.
pub fn student_panel_colors(theme_token: &str) -> (Color32, Color32) {
    match theme_token {
        "amber" => (Color32::from_rgb(255, 251, 235), Color32::from_rgb(255, 237, 213)),
        "rose" => (Color32::from_rgb(255, 241, 242), Color32::from_rgb(252, 231, 243)),
        "emerald" => (Color32::from_rgb(236, 253, 245), Color32::from_rgb(220, 252, 231)),
        _ => (Color32::from_rgb(248, 250, 252), Color32::from_rgb(241, 245, 249)),
    }
}

/// Convenience constants for the most commonly used colors
pub mod colors {
    use super::CURRENT_THEME;
    use eframe::egui::Color32;

    pub const PRIMARY: Color32 = CURRENT_THEME.interactive.primary;
    pub const APPROVE: Color32 = CURRENT_THEME.interactive.approve;
    pub const QUIET: Color32 = CURRENT_THEME.interactive.quiet;
    pub const DANGER: Color32 = CURRENT_THEME.interactive.danger;

    pub const TEXT_PRIMARY: Color32 = CURRENT_THEME.typography.primary;
    pub const TEXT_SECONDARY: Color32 = CURRENT_THEME.typography.secondary;
    pub const TEXT_MUTED: Color32 = CURRENT_THEME.typography.muted;
    pub const TEXT_WHITE: Color32 = CURRENT_THEME.typography.white;

    pub const CARD_BACKGROUND: Color32 = CURRENT_THEME.layout.card_background;
    pub const CARD_BORDER: Color32 = CURRENT_THEME.layout.card_border;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_status_has_distinct_palette() {
        let status = &CURRENT_THEME.status;
        assert_ne!(status.palette(ChoreStatus::Assigned), status.palette(ChoreStatus::Pending));
        assert_ne!(status.palette(ChoreStatus::Pending), status.palette(ChoreStatus::Completed));
    }

    #[test]
    fn test_unknown_panel_token_falls_back() {
        let fallback = student_panel_colors("plaid");
        assert_eq!(student_panel_colors(""), fallback);
        assert_ne!(student_panel_colors("amber"), fallback);
    }
}
