//! # UI Components Module
//!
//! The screens of the chore tracker and the helpers they share.
//!
//! ## Module Organization:
//! - `chore_actions` - Store operations the screens call (navigation, chores, chore types)
//! - `landing_view` - Entry screen with the parent card and kid badges
//! - `student_view` - A kid's chore board
//! - `parent_view` - Parent dashboard (approvals, assignment, active chores)
//! - `chore_type_form` - Inline custom chore type form
//! - `icons` - Icon keys to glyphs
//! - `styling` - Global egui styling and drawing helpers
//! - `theme` - Centralized colors

pub mod chore_actions;
pub mod chore_type_form;
pub mod icons;
pub mod landing_view;
pub mod parent_view;
pub mod student_view;
pub mod styling;
pub mod theme;

pub use styling::setup_kid_friendly_style;
