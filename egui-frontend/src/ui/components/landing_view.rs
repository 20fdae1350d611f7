//! # Landing View
//!
//! Entry screen. A "Parents" card opens the dashboard and a grid of kid
//! badges opens each kid's chore list. Nothing here changes chores.

use eframe::egui;
use shared::Student;

use crate::ui::app_state::ChoreTrackerApp;
use crate::ui::components::icons;
use crate::ui::components::styling::{card_frame, draw_vertical_gradient, heading};
use crate::ui::components::theme::{colors, CURRENT_THEME};

pub const EYEBROW: &str = "Welcome, Home Team";
pub const TITLE: &str = "Kind Chore Club";
pub const BLURB: &str =
    "Parents assign missions. Kids finish them. Parents give the final thumbs-up. No cameras - just kindness.";

const CARD_WIDTH: f32 = 360.0;
const CARD_HEIGHT: f32 = 300.0;

/// Badge caption under a kid's avatar, e.g. "Mia · 7"
pub fn badge_caption(student: &Student) -> String {
    format!("{} · {}", student.name, student.age)
}

impl ChoreTrackerApp {
    /// Render the landing page
    pub fn render_landing_view(&mut self, ui: &mut egui::Ui) {
        let full_rect = ui.max_rect();
        draw_vertical_gradient(ui, full_rect, CURRENT_THEME.layout.landing_top, CURRENT_THEME.layout.landing_bottom);

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(
                    egui::RichText::new(EYEBROW.to_uppercase())
                        .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                        .color(CURRENT_THEME.typography.eyebrow)
                        .strong(),
                );
                ui.label(heading(TITLE, 40.0));
                ui.add_space(6.0);
                ui.label(egui::RichText::new(BLURB).color(colors::TEXT_SECONDARY));
                ui.add_space(30.0);

                let total_width = CARD_WIDTH * 2.0 + 30.0;
                let side_space = ((ui.available_width() - total_width) / 2.0).max(0.0);
                ui.horizontal(|ui| {
                    ui.add_space(side_space);
                    self.render_parent_card(ui);
                    ui.add_space(30.0);
                    self.render_kids_card(ui);
                });
                ui.add_space(40.0);
            });
        });
    }

    fn render_parent_card(&mut self, ui: &mut egui::Ui) {
        let response = ui
            .allocate_ui(egui::vec2(CARD_WIDTH, CARD_HEIGHT), |ui| {
                card_frame(24.0).show(ui, |ui| {
                    ui.set_min_size(egui::vec2(CARD_WIDTH - 32.0, CARD_HEIGHT - 32.0));
                    ui.vertical_centered(|ui| {
                        ui.add_space(20.0);
                        egui::Frame::none()
                            .fill(CURRENT_THEME.layout.parent_badge)
                            .rounding(egui::Rounding::same(40.0))
                            .inner_margin(egui::Margin::same(16.0))
                            .show(ui, |ui| {
                                ui.label(egui::RichText::new(icons::PARENT_SHIELD).size(44.0).color(colors::TEXT_WHITE));
                            });
                        ui.add_space(12.0);
                        ui.label(heading("Parents", 26.0));
                        ui.label(egui::RichText::new("Assign & approve completions").color(colors::TEXT_MUTED));
                    });
                })
                .response
            })
            .inner;

        let response = response.interact(egui::Sense::click());
        if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }
        if response.clicked() {
            self.show_parent();
        }
    }

    fn render_kids_card(&mut self, ui: &mut egui::Ui) {
        let students = self.students();

        ui.allocate_ui(egui::vec2(CARD_WIDTH, CARD_HEIGHT), |ui| {
            card_frame(24.0)
                .stroke(egui::Stroke::new(3.0, CURRENT_THEME.interactive.selected_background))
                .show(ui, |ui| {
                    ui.set_min_size(egui::vec2(CARD_WIDTH - 32.0, CARD_HEIGHT - 32.0));
                    ui.vertical_centered(|ui| {
                        ui.add_space(20.0);
                        ui.label(egui::RichText::new(icons::KIDS_SMILE).size(44.0));
                        ui.add_space(12.0);
                        ui.label(
                            egui::RichText::new("Kids, pick your badge")
                                .font(egui::FontId::new(24.0, egui::FontFamily::Proportional))
                                .color(CURRENT_THEME.typography.accent)
                                .strong(),
                        );
                        ui.add_space(12.0);

                        ui.horizontal(|ui| {
                            for student in &students {
                                let badge = egui::Button::new(
                                    egui::RichText::new(format!("{}\n{}", student.avatar, badge_caption(student)))
                                        .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                                        .color(colors::TEXT_PRIMARY),
                                )
                                .fill(egui::Color32::TRANSPARENT)
                                .stroke(egui::Stroke::NONE)
                                .rounding(egui::Rounding::same(16.0))
                                .min_size(egui::vec2(90.0, 72.0));

                                if ui.add(badge).clicked() {
                                    self.show_student(&student.id);
                                }
                            }
                        });
                    });
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_caption() {
        let student = Student {
            id: "s2".to_string(),
            name: "Mia".to_string(),
            age: 7,
            avatar: "🐝".to_string(),
            theme: "rose".to_string(),
        };
        assert_eq!(badge_caption(&student), "Mia · 7");
    }
}
