//! Inline form for creating a custom chore type. Replaces the chore type
//! picker while open.

use eframe::egui;
use shared::IconKey;

use crate::ui::app_state::ChoreTrackerApp;
use crate::ui::components::icons;
use crate::ui::components::parent_view::section_label;
use crate::ui::components::styling::{heading, pill_button};
use crate::ui::components::theme::{colors, CURRENT_THEME};

pub const NAME_HINT: &str = "e.g. Water plants";
const NAME_LABEL: &str = "Name";
const ICON_LABEL: &str = "Pick an icon";

impl ChoreTrackerApp {
    pub fn render_chore_type_form(&mut self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(CURRENT_THEME.interactive.selected_background)
            .stroke(egui::Stroke::new(2.0, CURRENT_THEME.interactive.selected_border))
            .rounding(egui::Rounding::same(16.0))
            .inner_margin(egui::Margin::same(16.0))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.horizontal(|ui| {
                    ui.label(heading("Create custom chore", 17.0));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Cancel").clicked() {
                            self.cancel_chore_type_form();
                        }
                    });
                });
                ui.add_space(8.0);

                ui.label(section_label(NAME_LABEL));
                ui.add(
                    egui::TextEdit::singleline(&mut self.assignment.chore_type_form.label)
                        .hint_text(NAME_HINT)
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(8.0);

                ui.label(section_label(ICON_LABEL));
                ui.horizontal_wrapped(|ui| {
                    for key in IconKey::ALL {
                        let selected = self.assignment.chore_type_form.icon_key == key;
                        let (fill, border) = if selected {
                            (colors::PRIMARY, CURRENT_THEME.interactive.selected_border)
                        } else {
                            (colors::CARD_BACKGROUND, CURRENT_THEME.interactive.tile_border)
                        };
                        let text_color = if selected { colors::TEXT_WHITE } else { colors::TEXT_SECONDARY };
                        let tile = egui::Button::new(egui::RichText::new(icons::icon_glyph(key)).size(20.0).color(text_color))
                            .fill(fill)
                            .stroke(egui::Stroke::new(2.0, border))
                            .rounding(egui::Rounding::same(10.0))
                            .min_size(egui::vec2(44.0, 44.0));
                        if ui.add(tile).on_hover_text(key.as_str()).clicked() {
                            self.assignment.chore_type_form.icon_key = key;
                        }
                    }
                });
                ui.add_space(10.0);

                let can_submit = self.assignment.chore_type_form.can_submit();
                let save = pill_button("Save and select", colors::PRIMARY, colors::TEXT_WHITE, egui::vec2(ui.available_width(), 44.0));
                if ui.add_enabled(can_submit, save).clicked() {
                    self.submit_chore_type_form();
                }
            });
    }
}
