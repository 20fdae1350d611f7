//! # Styling Module
//!
//! Global egui styling and a few drawing helpers shared by the views.
//!
//! ## Key Functions:
//! - `setup_kid_friendly_style()` - Configure global egui styling
//! - `draw_vertical_gradient()` - Paint a top-to-bottom gradient background
//! - `card_frame()` - White rounded card with a soft border
//! - `pill_button()` - Large rounded button used for the main actions

use eframe::egui;
use egui::Color32;

use crate::ui::components::theme::{colors, CURRENT_THEME};

/// Setup kid-friendly UI styling for the entire application
pub fn setup_kid_friendly_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals = egui::Visuals::light();
        style.visuals.panel_fill = Color32::TRANSPARENT;
        style.visuals.button_frame = true;
        style.visuals.extreme_bg_color = Color32::WHITE; // text edit background

        // Larger text for readability
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(28.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(18.0, egui::FontFamily::Proportional),
        );

        // Rounded corners and padding
        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style.spacing.item_spacing = egui::vec2(10.0, 10.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(10.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(10.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(10.0);

        style
    });
}

/// Paint a vertical gradient over `rect`
pub fn draw_vertical_gradient(ui: &egui::Ui, rect: egui::Rect, top: Color32, bottom: Color32) {
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), top);
    mesh.colored_vertex(rect.right_top(), top);
    mesh.colored_vertex(rect.left_bottom(), bottom);
    mesh.colored_vertex(rect.right_bottom(), bottom);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(1, 2, 3);
    ui.painter().add(egui::Shape::mesh(mesh));
}

/// White rounded card with a soft border
pub fn card_frame(rounding: f32) -> egui::Frame {
    egui::Frame::none()
        .fill(colors::CARD_BACKGROUND)
        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
        .rounding(egui::Rounding::same(rounding))
        .inner_margin(egui::Margin::same(16.0))
        .shadow(egui::epaint::Shadow {
            offset: egui::vec2(0.0, 4.0),
            blur: 12.0,
            spread: 0.0,
            color: CURRENT_THEME.layout.card_shadow,
        })
}

/// Large rounded action button
pub fn pill_button(text: &str, fill: Color32, text_color: Color32, min_size: egui::Vec2) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(text.to_string())
            .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
            .color(text_color)
            .strong(),
    )
    .fill(fill)
    .rounding(egui::Rounding::same(16.0))
    .min_size(min_size)
}

/// Small rounded chip with a number or short word
pub fn chip(ui: &mut egui::Ui, text: &str, fill: Color32, text_color: Color32) {
    egui::Frame::none()
        .fill(fill)
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(text)
                        .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                        .color(text_color),
                )
                .selectable(false),
            );
        });
}

/// Heading text with the app's default weight
pub fn heading(text: &str, size: f32) -> egui::RichText {
    egui::RichText::new(text)
        .font(egui::FontId::new(size, egui::FontFamily::Proportional))
        .color(colors::TEXT_PRIMARY)
        .strong()
}
